//! Conversions between the supported notations. Every notation converts to
//! and from RGB, which acts as the pivot; converting between two non-RGB
//! notations goes through RGB first.
//!
//! Conversion is total: the divisions that could produce undefined results
//! (achromatic colors in HSL/HSB, pure black in CMYK) are short-circuited to
//! their conventional values instead.

use crate::color::{Color, Components};
use crate::{Cmyk, Hsb, Hsl, Rgb};

impl Color {
    /// Return this color with RGB components in the [0, 255] range.
    ///
    /// All other notations pivot through this one.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Color::Rgb(rgb) => rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Hsb(hsb) => hsb.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
            Color::Hex(hex) => Rgb::from_hex(hex),
        }
    }

    /// Return this color in the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        match *self {
            Color::Hsl(hsl) => hsl,
            _ => self.to_rgb().to_hsl(),
        }
    }

    /// Return this color in the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        match *self {
            Color::Hsb(hsb) => hsb,
            _ => self.to_rgb().to_hsb(),
        }
    }

    /// Return this color in the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        match *self {
            Color::Cmyk(cmyk) => cmyk,
            _ => self.to_rgb().to_cmyk(),
        }
    }

    /// Return this color as a 24-bit packed RGB integer.
    pub fn to_hex(&self) -> u32 {
        match *self {
            Color::Hex(hex) => hex,
            _ => self.to_rgb().to_hex(),
        }
    }
}

impl Rgb {
    /// Convert a color specified with RGB components to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_unit()).into()
    }

    /// Convert a color specified with RGB components to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        util::rgb_to_hsb(&self.to_unit()).into()
    }

    /// Convert a color specified with RGB components to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        let Components(red, green, blue) = self.to_unit();

        let key = 1.0 - red.max(green).max(blue);

        // Pure black would divide by zero below.
        if key == 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        Cmyk::new(
            (1.0 - red - key) / (1.0 - key),
            (1.0 - green - key) / (1.0 - key),
            (1.0 - blue - key) / (1.0 - key),
            key,
        )
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB components.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(util::hsl_to_rgb(&self.to_components()))
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to RGB components.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(util::hsb_to_rgb(&self.to_components()))
    }
}

impl Cmyk {
    /// Convert this color from the CMYK notation to RGB components.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(Components(
            (1.0 - self.cyan) * (1.0 - self.key),
            (1.0 - self.magenta) * (1.0 - self.key),
            (1.0 - self.yellow) * (1.0 - self.key),
        ))
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Calculate the hue from RGB components and return it along with the min
    /// and max channel values. The hue of an achromatic color is 0.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            let sector = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            sector / 6.0
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Base RGB offsets for the sixth of the hue wheel that `hue` falls into.
    /// The final arm closes the interval, so a hue of exactly 1 produces the
    /// same components as a hue of 0.
    fn hue_sector(hue: Component, chroma: Component, x: Component) -> Components {
        let hue = hue * 6.0;

        if hue < 1.0 {
            Components(chroma, x, 0.0)
        } else if hue < 2.0 {
            Components(x, chroma, 0.0)
        } else if hue < 3.0 {
            Components(0.0, chroma, x)
        } else if hue < 4.0 {
            Components(0.0, x, chroma)
        } else if hue < 5.0 {
            Components(x, 0.0, chroma)
        } else {
            Components(chroma, 0.0, x)
        }
    }

    /// Convert from HSL notation to RGB notation, all components in [0, 1].
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue * 6.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        hue_sector(hue, chroma, x).map(|v| v + m)
    }

    /// Convert from HSB notation to RGB notation, all components in [0, 1].
    pub fn hsb_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = *from;

        let chroma = brightness * saturation;
        let x = chroma * (1.0 - ((hue * 6.0) % 2.0 - 1.0).abs());
        let m = brightness - chroma;

        hue_sector(hue, chroma, x).map(|v| v + m)
    }

    /// Convert from RGB notation to HSL notation, RGB components in [0, 1].
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (max + min) / 2.0;

        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Components(hue, saturation, lightness)
    }

    /// Convert from RGB notation to HSB notation, RGB components in [0, 1].
    pub fn rgb_to_hsb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let delta = max - min;
        if delta == 0.0 {
            return Components(0.0, 0.0, max);
        }

        Components(hue, delta / max, max)
    }
}
