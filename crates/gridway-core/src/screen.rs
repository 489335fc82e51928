//! Presentation buffers: [`Tile`], [`Screen`], and frame diffing for
//! flicker-free terminal redraws.

use crate::geom::Point;
use crate::style::Style;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A styled character tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub ch: char,
    pub style: Style,
}

impl Tile {
    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the style (builder).
    #[inline]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Tile {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A 2D buffer of [`Tile`]s. Unlike a board, a screen is pure presentation:
/// the model draws into it every frame and the driver flushes the diff.
#[derive(Clone, Debug)]
pub struct Screen {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Screen {
    /// Create a screen of the given dimensions, filled with default tiles.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            tiles: vec![Tile::default(); (width * height) as usize],
            width,
            height,
        }
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
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

    /// Whether `p` is inside the screen.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Read the tile at `p`. Returns `Tile::default()` if out of bounds.
    pub fn at(&self, p: Point) -> Tile {
        if !self.contains(p) {
            return Tile::default();
        }
        self.tiles[self.index(p)]
    }

    /// Set the tile at `p`. No-op if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
    }

    /// Fill the whole screen with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Copy tiles from `src`, aligning origins; the overlapping region is
    /// copied.
    pub fn copy_from(&mut self, src: &Screen) {
        let w = self.width.min(src.width);
        let h = self.height.min(src.height);
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(x, y);
                let tile = src.at(p);
                self.set(p, tile);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameTile / compute_frame
// ---------------------------------------------------------------------------

/// A single tile that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTile {
    pub tile: Tile,
    pub pos: Point,
}

/// A set of tile changes (a diff frame).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub tiles: Vec<FrameTile>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two same-sized screens.
///
/// Returns a [`Frame`] containing only the tiles that differ, in row-major
/// order.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let mut tiles = Vec::new();
    for y in 0..curr.height() {
        for x in 0..curr.width() {
            let p = Point::new(x, y);
            let pt = prev.at(p);
            let ct = curr.at(p);
            if pt != ct {
                tiles.push(FrameTile { tile: ct, pos: p });
            }
        }
    }
    Frame {
        tiles,
        width: curr.width(),
        height: curr.height(),
    }
}
