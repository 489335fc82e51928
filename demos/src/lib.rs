//! Interactive A* workbench shared by the terminal binary.
//!
//! Demonstrates: obstacle painting and endpoint dragging with the mouse,
//! randomized wall layouts, heuristic switching, and the explored-frontier
//! overlay left behind by a search.

pub mod colors;

use gridway_core::{
    Board, CellState, Point,
    app::{Effect, Model},
    messages::{Key, MouseAction, Msg},
    screen::{Screen, Tile},
    style::Style,
};
use gridway_search::{Astar, Heuristic, SearchError, SearchOutcome};
use rand::rngs::StdRng;

/// Footer rows below the board: status line plus key help.
const STATUS_ROWS: i32 = 3;

/// Each line fits the 30-column default board without clipping.
const HELP_LINES: [&str; 2] = [
    "s: search  r: random  c: clear",
    "tab: heur  drag: draw  q: quit",
];

// ---------------------------------------------------------------------------
// Drag state
// ---------------------------------------------------------------------------

/// What a held primary button does to cells the cursor enters.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Drag {
    /// Paint cells toward this state (`Obstacle` draws walls, `Empty`
    /// erases them); only `Empty`/`Obstacle` cells are affected.
    Paint(CellState),
    MoveStart,
    MoveGoal,
}

// ---------------------------------------------------------------------------
// Workbench
// ---------------------------------------------------------------------------

/// The workbench model: a board under edit plus the search engine.
pub struct Workbench {
    board: Board,
    engine: Astar,
    ratio: f64,
    rng: StdRng,
    drag: Option<Drag>,
    drag_cell: Option<Point>,
    outcome: Option<SearchOutcome>,
    status: String,
}

impl Workbench {
    pub fn new(width: i32, height: i32, ratio: f64, heuristic: Heuristic, rng: StdRng) -> Self {
        let board = Board::new(width, height);
        let mut engine = Astar::for_board(&board);
        engine.set_heuristic(heuristic);
        Self {
            board,
            engine,
            ratio,
            rng,
            drag: None,
            drag_cell: None,
            outcome: None,
            status: "draw walls with the mouse, then press enter".into(),
        }
    }

    /// Terminal columns needed by [`Model::draw`].
    pub fn screen_width(&self) -> i32 {
        self.board.width()
    }

    /// Terminal rows needed by [`Model::draw`] (board plus footer).
    pub fn screen_height(&self) -> i32 {
        self.board.height() + STATUS_ROWS
    }

    fn run_search(&mut self) {
        let result = self.engine.run(&mut self.board);
        self.report(result);
    }

    fn report(&mut self, result: Result<SearchOutcome, SearchError>) {
        match result {
            Ok(outcome) => {
                self.status = if outcome.succeeded {
                    format!("path found ({} explored)", outcome.explored)
                } else {
                    "no path".into()
                };
                self.outcome = Some(outcome);
            }
            Err(e) => {
                self.status = e.to_string();
                self.outcome = None;
            }
        }
    }

    fn randomize(&mut self) {
        self.board.randomize_obstacles(self.ratio, &mut self.rng);
        self.clear_search();
        self.status = format!("randomized walls at ratio {:.2}", self.ratio);
    }

    fn clear(&mut self) {
        self.board.reset();
        self.clear_search();
        self.status = "board cleared".into();
    }

    fn clear_search(&mut self) {
        self.engine.initialize(&mut self.board);
        self.outcome = None;
    }

    fn toggle_heuristic(&mut self) {
        let next = self.engine.heuristic().toggled();
        self.engine.set_heuristic(next);
        self.status = format!("heuristic: {}", next.name());
    }

    fn mouse(&mut self, action: MouseAction, pos: Point) {
        match action {
            MouseAction::Press => {
                let Some(state) = self.board.state(pos) else {
                    return;
                };
                let drag = match state {
                    CellState::Start => Drag::MoveStart,
                    CellState::Goal => Drag::MoveGoal,
                    CellState::Obstacle => {
                        self.board.toggle_obstacle(pos);
                        Drag::Paint(CellState::Empty)
                    }
                    // Transient tags paint like the empty cells they cover;
                    // the toggle itself is a no-op on them.
                    CellState::Empty | CellState::Open | CellState::Closed => {
                        self.board.toggle_obstacle(pos);
                        Drag::Paint(CellState::Obstacle)
                    }
                };
                self.drag = Some(drag);
                self.drag_cell = Some(pos);
            }
            MouseAction::Move => {
                let Some(drag) = self.drag else {
                    return;
                };
                if self.drag_cell == Some(pos) {
                    return;
                }
                match drag {
                    Drag::MoveStart => {
                        self.board.move_start(pos);
                    }
                    Drag::MoveGoal => {
                        self.board.move_goal(pos);
                    }
                    Drag::Paint(target) => self.paint(pos, target),
                }
                self.drag_cell = Some(pos);
            }
            MouseAction::Release => {
                self.drag = None;
                self.drag_cell = None;
            }
        }
    }

    fn paint(&mut self, pos: Point, target: CellState) {
        match (self.board.state(pos), target) {
            (Some(CellState::Empty), CellState::Obstacle)
            | (Some(CellState::Obstacle), CellState::Empty) => {
                self.board.toggle_obstacle(pos);
            }
            _ => {}
        }
    }
}

impl Model for Workbench {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => None,
            Msg::Quit => Some(Effect::End),

            Msg::KeyDown { key } => {
                match key {
                    Key::Escape | Key::Char('q') | Key::Char('Q') => {
                        return Some(Effect::End);
                    }
                    Key::Enter | Key::Char('s') => self.run_search(),
                    Key::Char('r') => self.randomize(),
                    Key::Char('c') => self.clear(),
                    Key::Tab => self.toggle_heuristic(),
                    _ => {}
                }
                None
            }

            Msg::Mouse { action, pos } => {
                self.mouse(action, pos);
                None
            }

            Msg::Resize { .. } => None,
        }
    }

    fn draw(&self, screen: &mut Screen) {
        let bg_tile = Tile::default().with_style(Style::default().with_bg(colors::BG));
        screen.fill(bg_tile);

        // ---- Board ----
        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                let p = Point::new(x, y);
                let Some(state) = self.board.state(p) else {
                    continue;
                };
                let (ch, fg) = match state {
                    CellState::Empty => ('·', colors::EMPTY_FG),
                    CellState::Obstacle => ('#', colors::OBSTACLE_FG),
                    CellState::Start => ('S', colors::START_FG),
                    CellState::Goal => ('G', colors::GOAL_FG),
                    CellState::Open => ('o', colors::OPEN_FG),
                    CellState::Closed => ('x', colors::CLOSED_FG),
                };
                let style = Style::default().with_fg(fg).with_bg(colors::BG);
                screen.set(p, Tile::default().with_char(ch).with_style(style));
            }
        }

        // ---- Path overlay ----
        if let Some(ref outcome) = self.outcome {
            let style = Style::default().with_fg(colors::PATH_FG).with_bg(colors::BG);
            for &p in &outcome.path {
                if p == self.board.start() || p == self.board.goal() {
                    continue;
                }
                screen.set(p, Tile::default().with_char('*').with_style(style));
            }
        }

        // ---- Status bar ----
        let status_y = self.board.height();
        let status_style = Style::default()
            .with_fg(colors::STATUS_FG)
            .with_bg(colors::STATUS_BG);
        for x in 0..screen.width() {
            screen.set(
                Point::new(x, status_y),
                Tile::default().with_char(' ').with_style(status_style),
            );
        }
        let status = format!("[{}] {}", self.engine.heuristic().name(), self.status);
        for (i, ch) in status.chars().enumerate() {
            let x = i as i32;
            if x >= screen.width() {
                break;
            }
            screen.set(
                Point::new(x, status_y),
                Tile::default().with_char(ch).with_style(status_style),
            );
        }

        // ---- Key help ----
        let help_style = Style::default().with_fg(colors::HELP_FG).with_bg(colors::BG);
        for (row, line) in HELP_LINES.iter().enumerate() {
            for (i, ch) in line.chars().enumerate() {
                let x = i as i32;
                if x >= screen.width() {
                    break;
                }
                screen.set(
                    Point::new(x, status_y + 1 + row as i32),
                    Tile::default().with_char(ch).with_style(help_style),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn workbench(width: i32, height: i32) -> Workbench {
        Workbench::new(
            width,
            height,
            0.2,
            Heuristic::Manhattan,
            StdRng::seed_from_u64(7),
        )
    }

    fn obstacle_count(board: &Board) -> usize {
        let mut n = 0;
        for y in 0..board.height() {
            for x in 0..board.width() {
                if board.state(Point::new(x, y)) == Some(CellState::Obstacle) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn press_toggles_and_drag_paints_walls() {
        let mut wb = workbench(5, 5);
        wb.update(Msg::mouse(MouseAction::Press, Point::new(1, 0)));
        assert_eq!(wb.board.state(Point::new(1, 0)), Some(CellState::Obstacle));

        wb.update(Msg::mouse(MouseAction::Move, Point::new(2, 0)));
        wb.update(Msg::mouse(MouseAction::Move, Point::new(3, 0)));
        assert_eq!(wb.board.state(Point::new(2, 0)), Some(CellState::Obstacle));
        assert_eq!(wb.board.state(Point::new(3, 0)), Some(CellState::Obstacle));

        wb.update(Msg::mouse(MouseAction::Release, Point::new(3, 0)));
        // No drag anymore: a plain move paints nothing.
        wb.update(Msg::mouse(MouseAction::Move, Point::new(4, 0)));
        assert_eq!(wb.board.state(Point::new(4, 0)), Some(CellState::Empty));
    }

    #[test]
    fn erase_drag_only_touches_walls() {
        let mut wb = workbench(5, 5);
        wb.board.toggle_obstacle(Point::new(1, 0));
        wb.board.toggle_obstacle(Point::new(3, 0));

        wb.update(Msg::mouse(MouseAction::Press, Point::new(1, 0)));
        assert_eq!(wb.board.state(Point::new(1, 0)), Some(CellState::Empty));

        // Crossing an empty cell leaves it alone; the next wall is erased.
        wb.update(Msg::mouse(MouseAction::Move, Point::new(2, 0)));
        assert_eq!(wb.board.state(Point::new(2, 0)), Some(CellState::Empty));
        wb.update(Msg::mouse(MouseAction::Move, Point::new(3, 0)));
        assert_eq!(wb.board.state(Point::new(3, 0)), Some(CellState::Empty));
    }

    #[test]
    fn start_drag_refuses_walls() {
        let mut wb = workbench(5, 5);
        let start = wb.board.start();
        let wall = Point::new(1, 2);
        wb.board.toggle_obstacle(wall);

        wb.update(Msg::mouse(MouseAction::Press, start));
        wb.update(Msg::mouse(MouseAction::Move, wall));
        assert_eq!(wb.board.start(), start);

        wb.update(Msg::mouse(MouseAction::Move, Point::new(0, 1)));
        assert_eq!(wb.board.start(), Point::new(0, 1));
        assert_eq!(wb.board.state(start), Some(CellState::Empty));
    }

    #[test]
    fn goal_drag_moves_goal() {
        let mut wb = workbench(5, 5);
        let goal = wb.board.goal();
        wb.update(Msg::mouse(MouseAction::Press, goal));
        wb.update(Msg::mouse(MouseAction::Move, Point::new(4, 0)));
        assert_eq!(wb.board.goal(), Point::new(4, 0));
        assert_eq!(wb.board.state(goal), Some(CellState::Empty));
    }

    #[test]
    fn enter_runs_a_search() {
        let mut wb = workbench(5, 5);
        wb.update(Msg::key(Key::Enter));
        assert!(wb.status.starts_with("path found"));
        let outcome = wb.outcome.as_ref().unwrap();
        assert!(outcome.succeeded);
        assert_eq!(outcome.path[0], wb.board.goal());
    }

    #[test]
    fn walled_goal_reports_no_path() {
        let mut wb = workbench(5, 5);
        // Goal at (4, 2); wall off its three in-bounds neighbors.
        for p in [Point::new(3, 2), Point::new(4, 1), Point::new(4, 3)] {
            wb.board.toggle_obstacle(p);
        }
        wb.update(Msg::key(Key::Enter));
        assert_eq!(wb.status, "no path");
        let outcome = wb.outcome.as_ref().unwrap();
        assert!(!outcome.succeeded);

        // The fallback walk still renders as a '*' overlay, leading from
        // the start toward the closest reachable cell.
        let mut screen = Screen::new(wb.screen_width(), wb.screen_height());
        wb.draw(&mut screen);
        assert_eq!(screen.at(Point::new(1, 2)).ch, '*');
        assert_eq!(screen.at(Point::new(2, 2)).ch, '*');
        assert_eq!(screen.at(wb.board.goal()).ch, 'G');
    }

    #[test]
    fn search_errors_surface_in_the_status_line() {
        let mut wb = workbench(5, 5);
        wb.update(Msg::key(Key::Enter));
        assert!(wb.outcome.is_some());

        wb.report(Err(SearchError::StartIsGoal));
        assert_eq!(wb.status, SearchError::StartIsGoal.to_string());
        assert!(wb.outcome.is_none());
    }

    #[test]
    fn clear_removes_walls_and_overlay() {
        let mut wb = workbench(5, 5);
        wb.update(Msg::mouse(MouseAction::Press, Point::new(1, 0)));
        wb.update(Msg::mouse(MouseAction::Release, Point::new(1, 0)));
        wb.update(Msg::key(Key::Char('s')));
        wb.update(Msg::key(Key::Char('c')));

        assert_eq!(obstacle_count(&wb.board), 0);
        assert!(wb.outcome.is_none());
        for y in 0..wb.board.height() {
            for x in 0..wb.board.width() {
                let state = wb.board.state(Point::new(x, y)).unwrap();
                assert!(!state.is_transient());
            }
        }
    }

    #[test]
    fn randomize_places_walls() {
        let mut wb = workbench(10, 10);
        wb.update(Msg::key(Key::Char('r')));
        assert!(obstacle_count(&wb.board) > 0);
        assert!(wb.outcome.is_none());
    }

    #[test]
    fn tab_toggles_the_heuristic() {
        let mut wb = workbench(5, 5);
        wb.update(Msg::key(Key::Tab));
        assert_eq!(wb.engine.heuristic(), Heuristic::Euclidean);
        assert_eq!(wb.status, "heuristic: euclidean");
        wb.update(Msg::key(Key::Tab));
        assert_eq!(wb.engine.heuristic(), Heuristic::Manhattan);
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let mut wb = workbench(5, 5);
        assert!(matches!(
            wb.update(Msg::key(Key::Char('q'))),
            Some(Effect::End)
        ));
        assert!(matches!(wb.update(Msg::key(Key::Escape)), Some(Effect::End)));
        assert!(matches!(wb.update(Msg::Quit), Some(Effect::End)));
    }

    #[test]
    fn draw_shows_path_and_footer() {
        let mut wb = workbench(5, 5);
        wb.update(Msg::key(Key::Enter));

        let mut screen = Screen::new(wb.screen_width(), wb.screen_height());
        wb.draw(&mut screen);

        assert_eq!(screen.at(wb.board.start()).ch, 'S');
        assert_eq!(screen.at(wb.board.goal()).ch, 'G');
        // Interior path cells render as '*', replacing their closed tag.
        assert_eq!(screen.at(Point::new(2, 2)).ch, '*');
        // Footer status line mentions the heuristic.
        assert_eq!(screen.at(Point::new(1, 5)).ch, 'm');
        // Both help rows are drawn below the status line.
        assert_eq!(screen.at(Point::new(0, 6)).ch, 's');
        assert_eq!(screen.at(Point::new(0, 7)).ch, 't');
    }
}
