//! Model a color with the HSB notation, also known as HSV.

use crate::{Color, Component};

tinct_macros::gen_model! {
    /// A color specified with the HSB notation.
    pub struct Hsb {
        /// The hue component of the color, a fraction of a full turn in [0, 1).
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The brightness component of the color.
        brightness: Component,
    }
}

impl From<Hsb> for Color {
    fn from(value: Hsb) -> Self {
        Color::Hsb(value)
    }
}
