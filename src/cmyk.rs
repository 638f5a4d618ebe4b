//! Model a color with the CMYK notation.

use crate::color::Component;
use crate::Color;

/// A color specified with the CMYK notation, all components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan component of the color.
    pub cyan: Component,
    /// The magenta component of the color.
    pub magenta: Component,
    /// The yellow component of the color.
    pub yellow: Component,
    /// The key (black) component of the color.
    pub key: Component,
}

impl Cmyk {
    /// Create a new color with CMYK (cyan, magenta, yellow, key) components.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Color::Cmyk(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cmyk, Color};

    #[test]
    fn wraps_into_a_color() {
        let model = Cmyk::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(Color::from(model), Color::Cmyk(model));
    }
}
