/// Basic example: Convert a synthetic test image to ASCII art
///
/// Draws a radial gradient with a dark ring and prints it with and without
/// dithering
use ascii_ramp::{AsciiConfig, convert_image};
use image::{DynamicImage, Rgba, RgbaImage};

fn main() {
    println!("ASCII Ramp - Basic Example");
    println!("==========================\n");

    let width = 96;
    let height = 48;
    let mut img = RgbaImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt();

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = (y as f32 - center_y) * 2.0;
            let dist = (dx * dx + dy * dy).sqrt();

            let pixel = if (dist - 30.0).abs() < 2.0 {
                // Dark ring
                Rgba([0, 0, 0, 255])
            } else {
                let v = (255.0 * (1.0 - dist / max_dist).clamp(0.0, 1.0)) as u8;
                Rgba([v, v / 2, 255 - v, 255])
            };
            img.put_pixel(x, y, pixel);
        }
    }

    let img = DynamicImage::ImageRgba8(img);

    for dithering in [false, true] {
        let config = AsciiConfig {
            scale_factor: 2,
            horizontal_magnification: 1,
            dithering,
            ..Default::default()
        };

        println!("Dithering: {}", dithering);
        match convert_image(&img, &config) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Conversion failed: {}", e),
        }
    }
}
