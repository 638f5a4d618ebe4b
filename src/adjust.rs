//! Lightness adjustments, expressed through the HSL notation.

use crate::color::{Color, Component};
use crate::Hsl;

impl Color {
    /// Lighten the color by the given amount, a fraction in [0, 1] of its
    /// current lightness. The result is capped at full lightness.
    pub fn lightened(&self, amount: Component) -> Color {
        let hsl = self.to_hsl();

        Color::Hsl(Hsl::new(
            hsl.hue,
            hsl.saturation,
            (hsl.lightness * (1.0 + amount)).min(1.0),
        ))
    }

    /// Darken the color by the given amount, a fraction in [0, 1] of its
    /// current lightness.
    pub fn darkened(&self, amount: Component) -> Color {
        let hsl = self.to_hsl();

        Color::Hsl(Hsl::new(
            hsl.hue,
            hsl.saturation,
            hsl.lightness * (1.0 - amount),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_by_a_fifth() {
        let color = Color::Hex(0xEF5138);
        assert_eq!(color.lightened(0.2).to_hex(), 0xF3816F);
    }

    #[test]
    fn darken_by_a_fifth() {
        let color = Color::Hex(0xEF5138);
        assert_eq!(color.darkened(0.2).to_hex(), 0xDA2D12);
    }

    #[test]
    fn lightness_is_capped_at_white() {
        let color = Color::Hex(0xEF5138).lightened(1.0);
        assert_eq!(color.to_hsl().lightness, 1.0);
        assert_eq!(color.to_hex(), 0xFFFFFF);
    }

    #[test]
    fn darkening_all_the_way_reaches_black() {
        let color = Color::Hex(0xEF5138).darkened(1.0);
        assert_eq!(color.to_hex(), 0x000000);
    }
}
