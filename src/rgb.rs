//! Model a color with RGB components in the [0, 255] range.

use crate::color::{Component, Components};
use crate::Color;

/// A color specified with RGB components in the [0, 255] range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) components.
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }

    /// Unpack a 24-bit RGB integer: red in bits 16-23, green in bits 8-15,
    /// blue in bits 0-7.
    pub fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as Component,
            ((hex >> 8) & 0xFF) as Component,
            (hex & 0xFF) as Component,
        )
    }

    /// Pack the components, rounded to the nearest integer, into a 24-bit
    /// RGB integer.
    pub fn to_hex(&self) -> u32 {
        let red = (self.red.round() as u32) << 16;
        let green = (self.green.round() as u32) << 8;
        let blue = self.blue.round() as u32;

        red | green | blue
    }

    /// Return the components scaled to the unit range [0, 1].
    pub fn to_unit(&self) -> Components {
        Components(self.red, self.green, self.blue).map(|v| v / 255.0)
    }

    /// Create a new color from unit range components, scaled to [0, 255] and
    /// rounded to the nearest integer.
    pub fn from_unit(components: Components) -> Self {
        let Components(red, green, blue) = components.map(|v| (v * 255.0).round());
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}
