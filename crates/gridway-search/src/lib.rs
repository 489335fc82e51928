//! Interactive A* over [`gridway_core`] boards.
//!
//! The crate exposes the [`Astar`] engine together with the pieces it is
//! built from: per-cell cost records ([`CostGrid`]), ordered point sets for
//! the open and closed frontiers ([`PointSet`]), and the distance
//! estimators ([`Heuristic`]). A search runs to completion in one call and
//! leaves its exploration state readable for rendering.
//!
//! ```
//! use gridway_core::Board;
//! use gridway_search::Astar;
//!
//! let mut board = Board::new(10, 10);
//! let mut engine = Astar::for_board(&board);
//! let outcome = engine.run(&mut board).expect("search");
//! assert!(outcome.succeeded);
//! ```

mod astar;
mod costs;
mod error;
mod heuristic;
mod pointset;

pub use astar::{Astar, SearchOutcome};
pub use costs::{CostEntry, CostGrid};
pub use error::SearchError;
pub use heuristic::{Heuristic, STEP_COST};
pub use pointset::PointSet;
