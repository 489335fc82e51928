//! Distance estimates used to rank frontier nodes.

use std::fmt;
use std::str::FromStr;

use gridway_core::Point;

use crate::error::SearchError;

/// Cost of one orthogonal step.
pub const STEP_COST: f64 = 10.0;

/// The admissible estimate used to rank frontier nodes.
///
/// The enumeration is closed; unknown kinds only exist at the string
/// boundary, where [`FromStr`] rejects them as a configuration error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Scaled L1 distance: `STEP_COST * (|dx| + |dy|)`.
    #[default]
    Manhattan,
    /// Scaled L2 distance: `STEP_COST * sqrt(dx^2 + dy^2)`.
    Euclidean,
}

impl Heuristic {
    /// Estimated cost of travelling from `a` to `b`.
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        let dx = (a.x - b.x) as f64;
        let dy = (a.y - b.y) as f64;
        match self {
            Self::Manhattan => STEP_COST * (dx.abs() + dy.abs()),
            Self::Euclidean => STEP_COST * (dx * dx + dy * dy).sqrt(),
        }
    }

    /// The name accepted by [`FromStr`] and shown in status lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }

    /// The other heuristic.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Manhattan => Self::Euclidean,
            Self::Euclidean => Self::Manhattan,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    /// Parse a heuristic name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(SearchError::UnknownHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_scales_by_step_cost() {
        let h = Heuristic::Manhattan;
        assert_eq!(h.estimate(Point::new(0, 2), Point::new(4, 2)), 40.0);
        assert_eq!(h.estimate(Point::new(1, 1), Point::new(4, 5)), 70.0);
        assert_eq!(h.estimate(Point::new(3, 3), Point::new(3, 3)), 0.0);
    }

    #[test]
    fn euclidean_is_exact_on_pythagorean_triples() {
        let h = Heuristic::Euclidean;
        assert_eq!(h.estimate(Point::new(0, 0), Point::new(3, 4)), 50.0);
        assert_eq!(h.estimate(Point::new(2, 1), Point::new(2, 6)), 50.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let a = Point::new(0, 0);
        for x in -4..=4 {
            for y in -4..=4 {
                let b = Point::new(x, y);
                let e = Heuristic::Euclidean.estimate(a, b);
                let m = Heuristic::Manhattan.estimate(a, b);
                assert!(e <= m + 1e-9, "euclidean {e} > manhattan {m} at {b}");
            }
        }
    }

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!("manhattan".parse::<Heuristic>().unwrap(), Heuristic::Manhattan);
        assert_eq!("Euclidean".parse::<Heuristic>().unwrap(), Heuristic::Euclidean);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "diagonal".parse::<Heuristic>().unwrap_err();
        assert_eq!(err, SearchError::UnknownHeuristic("diagonal".into()));
    }

    #[test]
    fn default_is_manhattan() {
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
        assert_eq!(Heuristic::Manhattan.toggled(), Heuristic::Euclidean);
        assert_eq!(Heuristic::Euclidean.toggled(), Heuristic::Manhattan);
    }
}
