//! Image decoding and downscaling
//!
//! Decoded images become a [`Grid`] of packed `0xRRGGBB` colors, one per
//! pixel. Transparent pixels are composited over black first.

use crate::error::{AsciiError, Result};
use crate::grid::Grid;
use image::{DynamicImage, ImageReader, Rgb, RgbImage, imageops};
use log::debug;
use std::path::Path;

/// Decode the image at `path` and shrink it by `scale`
///
/// # Errors
/// - `NotFound` if the file cannot be opened or read (a directory, say)
/// - `Decode` if the data is corrupt or in an unsupported format
/// - `InvalidArgument` if `scale` is zero or larger than either dimension
pub fn load_colors(path: impl AsRef<Path>, scale: u32) -> Result<Grid<u32>> {
    let path = path.as_ref();
    let not_found = |_: std::io::Error| AsciiError::NotFound {
        path: path.to_path_buf(),
    };
    let image = ImageReader::open(path)
        .map_err(not_found)?
        .with_guessed_format()
        .map_err(not_found)?
        .decode()?;
    debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    image_to_colors(&image, scale)
}

/// Convert an already decoded image, shrinking it by `scale`
///
/// With `scale > 1` the new size is `floor(width / scale) × floor(height / scale)`,
/// resampled with a Catmull-Rom (bicubic) filter.
///
/// # Errors
/// Returns `InvalidArgument` if `scale` is zero or larger than either dimension.
pub fn image_to_colors(image: &DynamicImage, scale: u32) -> Result<Grid<u32>> {
    if scale == 0 {
        return Err(AsciiError::invalid("scale factor must be at least 1, got 0"));
    }

    let flattened = flatten_alpha(image);
    let scaled = if scale > 1 {
        scale_down(&flattened, scale)?
    } else {
        flattened
    };

    let (width, height) = scaled.dimensions();
    let colors = scaled.pixels().map(pack).collect();
    Grid::from_vec(height as usize, width as usize, colors)
}

/// Resample `image` to `1 / scale` of its size with a bicubic filter
fn scale_down(image: &RgbImage, scale: u32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    let target_width = width / scale;
    let target_height = height / scale;

    if target_width == 0 || target_height == 0 {
        return Err(AsciiError::invalid(format!(
            "scale factor {} is too large for a {}x{} image",
            scale, width, height
        )));
    }

    debug!(
        "Scaling {}x{} -> {}x{}",
        width, height, target_width, target_height
    );
    Ok(imageops::resize(
        image,
        target_width,
        target_height,
        imageops::FilterType::CatmullRom,
    ))
}

/// Composite every pixel over a black background
fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let over_black = |c: u8| ((u32::from(c) * u32::from(a) + 127) / 255) as u8;
        Rgb([over_black(r), over_black(g), over_black(b)])
    })
}

fn pack(pixel: &Rgb<u8>) -> u32 {
    let [r, g, b] = pixel.0;
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}
