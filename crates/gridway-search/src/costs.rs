//! Per-cell cost records.

use gridway_core::Point;

/// The cost record of one cell: rank `f`, accumulated cost `g`, heuristic
/// estimate `h`, and the expansion parent link.
///
/// Costs are `f64`: the Euclidean estimate is irrational and unvisited cells
/// hold `+inf`. The engine keeps `f = g + h` for every record it writes; the
/// store itself enforces nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostEntry {
    pub f: f64,
    pub g: f64,
    pub h: f64,
    /// The cell this one was discovered from. `None` for the start cell and
    /// for cells never touched by a search.
    pub parent: Option<Point>,
}

impl Default for CostEntry {
    #[inline]
    fn default() -> Self {
        Self {
            f: f64::INFINITY,
            g: f64::INFINITY,
            h: f64::INFINITY,
            parent: None,
        }
    }
}

impl CostEntry {
    /// Whether a search has written this record.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.f.is_finite()
    }
}

/// A flat grid of [`CostEntry`] records.
#[derive(Clone, Debug)]
pub struct CostGrid {
    entries: Vec<CostEntry>,
    width: i32,
    height: i32,
}

impl CostGrid {
    /// Create a store with every record at its default.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            entries: vec![CostEntry::default(); (width * height) as usize],
            width,
            height,
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the store.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Reset every record to its default, keeping the dimensions.
    pub fn reset(&mut self) {
        self.entries.fill(CostEntry::default());
    }

    /// Read the record at `p`. Returns the default record if out of bounds.
    pub fn at(&self, p: Point) -> CostEntry {
        if !self.contains(p) {
            return CostEntry::default();
        }
        self.entries[self.index(p)]
    }

    /// Write the record at `p`. No-op if out of bounds.
    pub fn set(&mut self, p: Point, entry: CostEntry) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.entries[idx] = entry;
    }
}
