//! The A* engine.
//!
//! [`Astar`] owns the per-search caches (cost records, open and closed sets,
//! the last walked path) and runs complete searches over a [`Board`],
//! tagging cells `Open`/`Closed` as it explores so a front end can render
//! the exploration afterwards.

use log::{debug, trace};

use gridway_core::{Board, CellState, Point};

use crate::costs::{CostEntry, CostGrid};
use crate::error::SearchError;
use crate::heuristic::{Heuristic, STEP_COST};
use crate::pointset::PointSet;

/// Neighbor expansion order: +x, -x, -y, +y. The order is observable
/// through minimum-f tie-breaking; keep it fixed.
const NEIGHBOR_DELTAS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// The result of a completed run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Whether the goal was reached.
    pub succeeded: bool,
    /// The walked cell sequence, end first, start last. On success the end
    /// is the goal; on an unsuccessful run it is the most promising
    /// explored cell.
    pub path: Vec<Point>,
    /// The walk length minus its two endpoints. Reported as-is, so a
    /// single-cell walk yields -1.
    pub explored: i32,
}

// ---------------------------------------------------------------------------
// Astar
// ---------------------------------------------------------------------------

/// The A* engine for a fixed board size.
///
/// The caches resize themselves when handed a board of different
/// dimensions. After a run, the open/closed sets, the cost records and the
/// walked path stay readable for overlay rendering until the next
/// [`initialize`](Astar::initialize).
#[derive(Debug)]
pub struct Astar {
    heuristic: Heuristic,
    costs: CostGrid,
    open: PointSet,
    closed: PointSet,
    path: Vec<Point>,
}

impl Astar {
    /// Create an engine for boards of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            heuristic: Heuristic::default(),
            costs: CostGrid::new(width, height),
            open: PointSet::new(width, height),
            closed: PointSet::new(width, height),
            path: Vec::new(),
        }
    }

    /// Create an engine sized for `board`.
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.width(), board.height())
    }

    /// The heuristic used by the next run.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Select the heuristic for subsequent runs.
    #[inline]
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    /// The open set of the last (or running) search.
    #[inline]
    pub fn open_set(&self) -> &PointSet {
        &self.open
    }

    /// The closed set of the last (or running) search.
    #[inline]
    pub fn closed_set(&self) -> &PointSet {
        &self.closed
    }

    /// The cost records of the last (or running) search.
    #[inline]
    pub fn costs(&self) -> &CostGrid {
        &self.costs
    }

    /// The walked cells of the last run, end first. Empty before the first
    /// run and after [`initialize`](Astar::initialize).
    #[inline]
    pub fn last_path(&self) -> &[Point] {
        &self.path
    }

    /// Reset all search state and seed the start node.
    ///
    /// Clears both sets, the cost records and the cached path, reverts the
    /// board's transient annotations, then seeds the start cell with
    /// `g = 0`, `h = f = heuristic(start, goal)` and inserts it into the
    /// open set. Calling this twice in a row produces identical state.
    pub fn initialize(&mut self, board: &mut Board) {
        self.fit_to(board);
        self.open.clear();
        self.closed.clear();
        self.costs.reset();
        self.path.clear();
        board.clear_transient();

        let start = board.start();
        let h = self.heuristic.estimate(start, board.goal());
        self.costs.set(
            start,
            CostEntry {
                f: h,
                g: 0.0,
                h,
                parent: None,
            },
        );
        self.open.insert(start);
    }

    /// Run a complete search over `board`.
    ///
    /// Explored cells are tagged `Open`/`Closed` on the board as the search
    /// proceeds (the endpoints keep their identity). "No path" is a normal
    /// outcome: the open set ran dry, and the walk leads to the most
    /// promising closed cell instead of the goal. Errors abort the search,
    /// leaving the board's annotations as they were at the failure point.
    pub fn run(&mut self, board: &mut Board) -> Result<SearchOutcome, SearchError> {
        self.initialize(board);
        let goal = board.goal();
        debug!(
            "astar: {}x{} start={} goal={} heuristic={}",
            board.width(),
            board.height(),
            board.start(),
            goal,
            self.heuristic,
        );

        let mut current = match self.min_f(&self.open) {
            Some(p) if p == board.start() => p,
            _ => return Err(SearchError::StartNodeInconsistency),
        };
        if current == goal {
            return Err(SearchError::StartIsGoal);
        }

        let (end, succeeded) = loop {
            self.expand(board, current);
            match self.min_f(&self.open) {
                None => {
                    // Frontier exhausted: no path. Walk to the most
                    // promising closed cell instead.
                    let fallback = self.min_f_closed(goal)?;
                    break (fallback, false);
                }
                Some(next) if next == goal => break (goal, true),
                Some(next) => current = next,
            }
        };

        self.reconstruct(end)?;
        let explored = self.path.len() as i32 - 2;
        debug!(
            "astar: {} after {} expansions ({} still open)",
            if succeeded { "path found" } else { "no path" },
            self.closed.len(),
            self.open.len(),
        );
        Ok(SearchOutcome {
            succeeded,
            path: self.path.clone(),
            explored,
        })
    }

    /// Resize the caches when the board dimensions changed.
    fn fit_to(&mut self, board: &Board) {
        if self.costs.width() != board.width() || self.costs.height() != board.height() {
            self.costs = CostGrid::new(board.width(), board.height());
            self.open = PointSet::new(board.width(), board.height());
            self.closed = PointSet::new(board.width(), board.height());
        }
    }

    /// Minimum-f member of `set`, scanning in insertion order.
    ///
    /// The comparison is `<=` against the running minimum, so among
    /// equal-f members the latest-scanned one wins.
    fn min_f(&self, set: &PointSet) -> Option<Point> {
        let mut best: Option<(Point, f64)> = None;
        for &p in set.iter() {
            let f = self.costs.at(p).f;
            match best {
                Some((_, best_f)) if f > best_f => {}
                _ => best = Some((p, f)),
            }
        }
        best.map(|(p, _)| p)
    }

    /// Fallback selection once the open set is exhausted: minimum-f member
    /// of the closed set.
    fn min_f_closed(&self, goal: Point) -> Result<Point, SearchError> {
        if self.closed.contains(goal) {
            return Err(SearchError::GoalInClosedSet);
        }
        self.min_f(&self.closed).ok_or(SearchError::EmptyClosedSet)
    }

    /// Expand `pos`: relax its four orthogonal neighbors, then move it from
    /// the open set to the closed set, tagging display states on the board.
    fn expand(&mut self, board: &mut Board, pos: Point) {
        let start = board.start();
        let goal = board.goal();
        let g = self.costs.at(pos).g;

        for delta in NEIGHBOR_DELTAS {
            let neighbor = pos + delta;
            if !board.is_walkable(neighbor) || self.closed.contains(neighbor) {
                continue;
            }
            let tentative = g + STEP_COST;
            if self.open.contains(neighbor) {
                let entry = self.costs.at(neighbor);
                if tentative < entry.g {
                    trace!("astar: relax {neighbor}: g {} -> {}", entry.g, tentative);
                    // f is re-derived from the stored h, not re-estimated.
                    self.costs.set(
                        neighbor,
                        CostEntry {
                            f: tentative + entry.h,
                            g: tentative,
                            h: entry.h,
                            parent: Some(pos),
                        },
                    );
                }
            } else {
                let h = self.heuristic.estimate(neighbor, goal);
                self.costs.set(
                    neighbor,
                    CostEntry {
                        f: tentative + h,
                        g: tentative,
                        h,
                        parent: Some(pos),
                    },
                );
                self.open.insert(neighbor);
                if neighbor != goal {
                    board.set_state(neighbor, CellState::Open);
                }
            }
        }

        self.open.remove(pos);
        self.closed.insert(pos);
        if pos != start && pos != goal {
            board.set_state(pos, CellState::Closed);
        }
    }

    /// Walk the parent chain from `end` back to the start, caching the
    /// visited cells (end first).
    ///
    /// Every ancestor reached through a parent link must be a closed-set
    /// member; anything else means the bookkeeping is corrupt.
    fn reconstruct(&mut self, end: Point) -> Result<(), SearchError> {
        self.path.clear();
        self.path.push(end);
        let mut parent = self.costs.at(end).parent;
        while let Some(p) = parent {
            if !self.closed.contains(p) {
                return Err(SearchError::BrokenParentChain(p));
            }
            self.path.push(p);
            parent = self.costs.at(p).parent;
        }
        Ok(())
    }
}
