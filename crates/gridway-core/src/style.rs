//! Tile styling: [`Color`] and [`Style`].

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A 24-bit RGB colour stored as `0x00RRGGBB`.
///
/// The zero value is [`Color::DEFAULT`]: drivers render it as the terminal's
/// own foreground or background rather than as black. Palettes that want
/// actual black should use a near-black RGB value instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// The terminal's own colour; what `Color::default()` gives.
    pub const DEFAULT: Self = Self(0);

    /// Pack three channels into a colour.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// The red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// The green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// The blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground and background of one screen tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    /// Builder: replace the foreground.
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: replace the background.
    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_in_rgb_order() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.0, 0x0012_3456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn zero_is_the_terminal_default() {
        assert_eq!(Color::default(), Color::DEFAULT);
        // from_rgb(0, 0, 0) collapses onto DEFAULT; palettes use near-black.
        assert_eq!(Color::from_rgb(0, 0, 0), Color::DEFAULT);
    }

    #[test]
    fn builders_leave_the_other_half_alone() {
        let s = Style::default().with_fg(Color::from_rgb(200, 10, 10));
        assert_eq!(s.bg, Color::DEFAULT);
        let s = s.with_bg(Color::from_rgb(30, 30, 50));
        assert_eq!(s.fg.r(), 200);
        assert_eq!(s.bg.b(), 50);
    }
}
