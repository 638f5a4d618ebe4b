//! A [`Color`] represents a color that was specified in any of the supported
//! notations.

use crate::{Cmyk, Hsb, Hsl, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color tagged with the notation it was specified in.
///
/// A value is immutable once constructed. Reading the stored notation back is
/// a no-op; reading any other notation converts through RGB as the pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A color specified with RGB components in the [0, 255] range.
    Rgb(Rgb),
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    Hsl(Hsl),
    /// A color specified with the HSB (hue, saturation, brightness) notation.
    Hsb(Hsb),
    /// A color specified with the CMYK (cyan, magenta, yellow, key) notation.
    Cmyk(Cmyk),
    /// A color specified as a 24-bit packed RGB integer, e.g. `0xFF8000`.
    Hex(u32),
}
