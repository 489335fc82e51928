//! The cell alphabet of a [`Board`](crate::board::Board).

/// State of a single board cell.
///
/// `Open` and `Closed` are transient search annotations layered onto
/// otherwise-empty cells while a search result is on display. They never
/// replace the `Start`/`Goal` identity of the two endpoint cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Walkable and unannotated.
    #[default]
    Empty,
    /// Blocks movement.
    Obstacle,
    /// The unique search origin.
    Start,
    /// The unique search target.
    Goal,
    /// Annotation: discovered but not yet expanded.
    Open,
    /// Annotation: expanded.
    Closed,
}

impl CellState {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Whether this is a transient search annotation (`Open` or `Closed`).
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Open | Self::Closed)
    }
}
