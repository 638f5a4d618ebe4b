//! Model a color with the HSL notation.

use crate::{Color, Component};

tinct_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue component of the color, a fraction of a full turn in [0, 1).
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}
