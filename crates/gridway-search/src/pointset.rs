//! Insertion-ordered point sets for the open and closed lists.

use gridway_core::Point;

/// An insertion-ordered set of in-bounds grid points with O(1) membership
/// tests.
///
/// Iteration yields points in insertion order and removal keeps the relative
/// order of the survivors. The order is load-bearing: minimum-f selection
/// scans it, and ties resolve by scan position.
#[derive(Clone, Debug)]
pub struct PointSet {
    entries: Vec<Point>,
    member: Vec<bool>,
    width: i32,
    height: i32,
}

impl PointSet {
    /// Create an empty set covering a `width` by `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            entries: Vec::new(),
            member: vec![false; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Whether `p` is a member.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p) && self.member[self.index(p)]
    }

    /// Insert `p` at the end of the order. Returns `false` (and changes
    /// nothing) if `p` is already a member or out of bounds.
    pub fn insert(&mut self, p: Point) -> bool {
        if !self.in_bounds(p) || self.contains(p) {
            return false;
        }
        let idx = self.index(p);
        self.member[idx] = true;
        self.entries.push(p);
        true
    }

    /// Remove `p`, keeping the relative order of the remaining points.
    /// Returns whether `p` was a member.
    pub fn remove(&mut self, p: Point) -> bool {
        if !self.contains(p) {
            return false;
        }
        let idx = self.index(p);
        self.member[idx] = false;
        if let Some(pos) = self.entries.iter().position(|&q| q == p) {
            self.entries.remove(pos);
        }
        true
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.member.fill(false);
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate members in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.entries.iter()
    }

    /// The members in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_contains_len() {
        let mut set = PointSet::new(4, 4);
        assert!(set.is_empty());
        assert!(set.insert(Point::new(1, 2)));
        assert!(set.insert(Point::new(3, 0)));
        assert!(set.contains(Point::new(1, 2)));
        assert!(!set.contains(Point::new(0, 0)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn double_insert_is_rejected() {
        let mut set = PointSet::new(4, 4);
        assert!(set.insert(Point::new(1, 1)));
        assert!(!set.insert(Point::new(1, 1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut set = PointSet::new(4, 4);
        assert!(!set.insert(Point::new(-1, 0)));
        assert!(!set.insert(Point::new(0, 4)));
        assert!(set.is_empty());
        assert!(!set.contains(Point::new(9, 9)));
    }

    #[test]
    fn remove_preserves_order() {
        let mut set = PointSet::new(4, 4);
        for p in [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)] {
            set.insert(p);
        }
        assert!(set.remove(Point::new(1, 0)));
        assert!(!set.remove(Point::new(1, 0)));
        let order: Vec<Point> = set.iter().copied().collect();
        assert_eq!(order, vec![Point::new(0, 0), Point::new(2, 0), Point::new(3, 0)]);
    }

    #[test]
    fn reinsert_goes_to_the_back() {
        let mut set = PointSet::new(4, 4);
        set.insert(Point::new(0, 0));
        set.insert(Point::new(1, 0));
        set.remove(Point::new(0, 0));
        set.insert(Point::new(0, 0));
        assert_eq!(set.as_slice(), &[Point::new(1, 0), Point::new(0, 0)]);
    }

    #[test]
    fn clear_empties_membership_too() {
        let mut set = PointSet::new(3, 3);
        set.insert(Point::new(2, 2));
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(Point::new(2, 2)));
        assert!(set.insert(Point::new(2, 2)));
    }
}
