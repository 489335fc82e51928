//! **gridway-core** — the pathfinding workbench board and application loop.
//!
//! This crate provides the foundational types used across the *gridway*
//! workspace: geometry, the editable cell [`Board`], input events, styled
//! screen tiles, and the Elm-architecture application loop.

pub mod app;
pub mod board;
pub mod geom;
pub mod messages;
pub mod screen;
pub mod state;
pub mod style;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use board::Board;
pub use geom::Point;
pub use messages::*;
pub use screen::{Frame, FrameTile, Screen, Tile, compute_frame};
pub use state::CellState;
pub use style::{Color, Style};
