use tinct::Color;

fn main() {
    let base: Color = "#ef5138".parse().expect("a valid hex color string");

    // #f3816f
    let lighter = base.lightened(0.2);

    // #da2d12
    let darker = base.darkened(0.2);

    println!("base    = {base}");
    println!("lighter = {lighter}");
    println!("darker  = {darker}");
}
