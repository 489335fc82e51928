//! The search failure taxonomy.

use std::fmt;

use gridway_core::Point;

/// Errors that abort a search.
///
/// `UnknownHeuristic`, `StartIsGoal` and `StartNodeInconsistency` are
/// configuration errors: the request itself is unsatisfiable. The remaining
/// variants are invariant violations: the engine's bookkeeping was found in
/// an impossible state. "No path exists" is *not* an error; it is reported
/// as an unsuccessful [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A name that matches no known heuristic.
    UnknownHeuristic(String),
    /// The start and goal coincide; there is nothing to search.
    StartIsGoal,
    /// The seeded start node was not the minimum-f open node right after
    /// initialization.
    StartNodeInconsistency,
    /// The goal turned up in the closed set during exhaustion fallback.
    GoalInClosedSet,
    /// The closed set was empty during exhaustion fallback.
    EmptyClosedSet,
    /// A path ancestor was missing from the closed set.
    BrokenParentChain(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHeuristic(name) => {
                write!(
                    f,
                    "unknown heuristic \u{201c}{name}\u{201d} (expected \u{201c}manhattan\u{201d} or \u{201c}euclidean\u{201d})"
                )
            }
            Self::StartIsGoal => write!(f, "start and goal coincide; nothing to search"),
            Self::StartNodeInconsistency => {
                write!(f, "start node inconsistency: seeding left the open set in a bad state")
            }
            Self::GoalInClosedSet => {
                write!(f, "goal found in the closed set during fallback selection")
            }
            Self::EmptyClosedSet => {
                write!(f, "closed set empty during fallback selection")
            }
            Self::BrokenParentChain(p) => {
                write!(f, "path reconstruction: parent {p} is not in the closed set")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bad_heuristic() {
        let err = SearchError::UnknownHeuristic("diagonal".into());
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn display_names_the_broken_parent() {
        let err = SearchError::BrokenParentChain(Point::new(3, 1));
        assert!(err.to_string().contains("(3, 1)"));
    }
}
