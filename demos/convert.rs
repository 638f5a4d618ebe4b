use tinct::Color;

pub fn main() {
    let color = Color::Hex(0xEF5138);

    // 239, 81, 56
    let rgb = color.to_rgb();

    // 0.022769, 0.851174, 0.578431
    let hsl = color.to_hsl();

    // 0.022769, 0.765690, 0.937255
    let hsb = color.to_hsb();

    // 0.0, 0.661095, 0.765690, 0.062745
    let cmyk = color.to_cmyk();

    dbg!(rgb, hsl, hsb, cmyk);
}
