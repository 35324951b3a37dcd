/// Render the same horizontal gradient with every preset and reducer
use ascii_ramp::{AsciiConfig, Preset, Reducer, Result, convert_image};
use image::{DynamicImage, Rgb, RgbImage};

fn main() -> Result<()> {
    println!("ASCII Ramp - Preset Demo");
    println!("========================\n");

    // Red-to-cyan gradient so the reducers disagree
    let img = RgbImage::from_fn(120, 4, |x, _| {
        let v = (x * 255 / 119) as u8;
        Rgb([255 - v, v, v])
    });
    let img = DynamicImage::ImageRgb8(img);

    for preset in Preset::ALL {
        let config = AsciiConfig {
            horizontal_magnification: 1,
            ..AsciiConfig::from_preset(preset)
        };
        let text = convert_image(&img, &config)?;
        println!("{:<12} {}", preset, text.lines().next().unwrap_or(""));
    }
    println!();

    for reducer in Reducer::ALL {
        let config = AsciiConfig {
            reducer,
            horizontal_magnification: 1,
            ..Default::default()
        };
        let text = convert_image(&img, &config)?;
        println!("{:<15} {}", reducer, text.lines().next().unwrap_or(""));
    }

    Ok(())
}
