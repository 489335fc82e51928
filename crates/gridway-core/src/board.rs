//! The editable pathfinding board.
//!
//! A [`Board`] is a flat rectangular buffer of [`CellState`] values plus the
//! two endpoint coordinates. All editing goes through the invariant-preserving
//! operations (`toggle_obstacle`, `move_start`, `move_goal`, ...); exactly one
//! cell holds `Start`, exactly one holds `Goal`, and the two never coincide.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::geom::Point;
use crate::state::CellState;

/// A mutable rectangular grid of cells with unique start and goal endpoints.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
    start: Point,
    goal: Point,
}

impl Board {
    /// Create a board of `width` columns by `height` rows, all cells empty,
    /// with the start on the middle row of the first column and the goal on
    /// the middle row of the last column.
    ///
    /// # Panics
    ///
    /// Panics if `width < 2` or `height < 1`: the start and goal must fit
    /// on distinct cells.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width >= 2 && height >= 1,
            "board must be at least 2x1, got {width}x{height}"
        );
        let start = Point::new(0, height / 2);
        let goal = Point::new(width - 1, height / 2);
        let mut board = Self {
            cells: vec![CellState::Empty; (width * height) as usize],
            width,
            height,
            start,
            goal,
        };
        board.set_state(start, CellState::Start);
        board.set_state(goal, CellState::Goal);
        board
    }

    /// Width of the board (columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the board (rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether the board contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// The current start coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The current goal coordinate.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Get the cell state at a point, or `None` if out of bounds.
    pub fn state(&self, p: Point) -> Option<CellState> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell state at a point. Does nothing if out of bounds.
    ///
    /// This is the raw write primitive; it performs no endpoint bookkeeping.
    /// Use [`move_start`](Self::move_start) / [`move_goal`](Self::move_goal)
    /// / [`toggle_obstacle`](Self::toggle_obstacle) for invariant-preserving
    /// edits.
    pub fn set_state(&mut self, p: Point, state: CellState) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = state;
    }

    /// Whether a search may step onto the cell at `p`. Out-of-bounds points
    /// are not walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.state(p).is_some_and(CellState::is_walkable)
    }

    /// Toggle `Empty` / `Obstacle` at a point and return the resulting state.
    ///
    /// Any other state (the endpoints, or leftover search annotations) is
    /// left unchanged. Returns `None` if out of bounds.
    pub fn toggle_obstacle(&mut self, p: Point) -> Option<CellState> {
        let next = match self.state(p)? {
            CellState::Empty => CellState::Obstacle,
            CellState::Obstacle => CellState::Empty,
            other => other,
        };
        self.set_state(p, next);
        Some(next)
    }

    /// Move the start endpoint onto `to`.
    ///
    /// Succeeds only when the target cell is currently `Empty`; the vacated
    /// cell becomes `Empty`. Returns whether the move happened.
    pub fn move_start(&mut self, to: Point) -> bool {
        if self.state(to) != Some(CellState::Empty) {
            return false;
        }
        let from = self.start;
        self.set_state(from, CellState::Empty);
        self.set_state(to, CellState::Start);
        self.start = to;
        true
    }

    /// Move the goal endpoint onto `to`. Same rules as
    /// [`move_start`](Self::move_start).
    pub fn move_goal(&mut self, to: Point) -> bool {
        if self.state(to) != Some(CellState::Empty) {
            return false;
        }
        let from = self.goal;
        self.set_state(from, CellState::Empty);
        self.set_state(to, CellState::Goal);
        self.goal = to;
        true
    }

    /// Clear the whole board back to `Empty`, re-stamping the endpoints at
    /// their current coordinates. Obstacles and search annotations are lost;
    /// endpoint moves survive.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        let (start, goal) = (self.start, self.goal);
        self.set_state(start, CellState::Start);
        self.set_state(goal, CellState::Goal);
    }

    /// Revert every transient search annotation (`Open` / `Closed`) back to
    /// `Empty`, leaving obstacles and endpoints alone.
    pub fn clear_transient(&mut self) {
        for cell in &mut self.cells {
            if cell.is_transient() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Reset the board, then scatter random obstacles.
    ///
    /// All cell coordinates are shuffled with the injected `rng` and a prefix
    /// of them is marked `Obstacle`, skipping the endpoints without
    /// replacement (so the realized count may fall short by up to two).
    pub fn randomize_obstacles(&mut self, ratio: f64, rng: &mut impl Rng) {
        self.reset();
        // TODO: the candidate count is computed over (width+1)*(height+1)
        // rather than the cell count; verify the intended density before
        // changing it.
        let candidates = ((self.width + 1) * (self.height + 1)) as f64;
        let wanted = (ratio * candidates) as usize;

        let mut coords = Vec::with_capacity((self.width * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                coords.push(Point::new(x, y));
            }
        }
        coords.shuffle(rng);
        for &p in coords.iter().take(wanted) {
            if p != self.start && p != self.goal {
                self.set_state(p, CellState::Obstacle);
            }
        }
    }
}
