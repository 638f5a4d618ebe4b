//! This program renders a swatch sheet: one row per seed color, sweeping
//! from its darkest shade on the left to its lightest on the right.

use image::{Rgba, RgbaImage};
use tinct::{Color, Component};

const WIDTH: u32 = 1000;
const HEIGHT_PER_COLOR: u32 = 100;

const SEEDS: [u32; 6] = [0xEF5138, 0x7F007F, 0x996600, 0x00FF00, 0x0000FF, 0xB3B3B3];

fn main() {
    let height = SEEDS.len() as u32 * HEIGHT_PER_COLOR;

    let mut img = RgbaImage::new(WIDTH, height);

    img.enumerate_rows_mut().for_each(|(_, pixels)| {
        for (x, y, pixel) in pixels {
            // Map the column to [-1, 1]: negative darkens, positive lightens.
            let t = (x as Component / WIDTH as Component) * 2.0 - 1.0;

            let seed = Color::Hex(SEEDS[(y / HEIGHT_PER_COLOR) as usize]);
            let shade = if t < 0.0 {
                seed.darkened(-t)
            } else {
                seed.lightened(t)
            };

            let rgb = shade.to_rgb();
            *pixel = Rgba([rgb.red as u8, rgb.green as u8, rgb.blue as u8, 255]);
        }
    });

    img.save("out.png")
        .expect("could not write image to out.png");
}
