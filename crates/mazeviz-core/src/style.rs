//! Drawing colours.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGBA colour packed into a `u32` (0xRRGGBBAA).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Construct from individual RGBA components.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Construct an opaque colour.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Alpha component (255 = opaque).
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Composite `self` over an opaque `background`, returning an opaque
    /// colour. For targets that cannot represent translucency.
    pub fn blend_over(self, background: Color) -> Color {
        let a = self.a() as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8;
        Color::from_rgb(
            mix(self.r(), background.r()),
            mix(self.g(), background.g()),
            mix(self.b(), background.b()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::from_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x1234_5678);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(Color::from_rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn blend_extremes() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.blend_over(Color::WHITE), red);
        let clear = Color::from_rgba(255, 0, 0, 0);
        assert_eq!(clear.blend_over(Color::WHITE), Color::WHITE);
    }

    #[test]
    fn blend_half() {
        let half = Color::from_rgba(0, 0, 0, 128);
        let out = half.blend_over(Color::WHITE);
        assert_eq!(out.r(), 127);
        assert_eq!(out.a(), 255);
    }
}
