use crate::ascii::render;
use crate::color::Rgb;
use crate::config::AsciiConfig;
use crate::dither::floyd_steinberg;
use crate::error::Result;
use crate::grid::Grid;
use crate::loader::{image_to_colors, load_colors};
use crate::luminance::Reducer;
use crate::mapping::Ramp;
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Reduce every packed color to a brightness scalar, in parallel
pub fn brightness(colors: &Grid<u32>, reducer: Reducer) -> Grid<f64> {
    colors.par_map(|&color| reducer.apply(Rgb::from_packed(color)))
}

/// Map a brightness grid onto `ramp`, optionally dithering first
pub fn quantize_grid<T>(brightness: &Grid<f64>, ramp: &Ramp<T>, dithering: bool) -> Grid<T>
where
    T: Clone + PartialEq + Send + Sync,
{
    if dithering {
        floyd_steinberg(brightness, |d| ramp.snap(d)).par_map(|&d| ramp.quantize(d))
    } else {
        brightness.par_map(|&d| ramp.quantize(d))
    }
}

/// Convert a grid of packed colors into a grid of glyphs
///
/// Pipeline:
/// 1. Reduce each color to brightness with `config.reducer`
/// 2. Optionally apply Floyd-Steinberg dithering against the ramp
/// 3. Quantize onto the effective ramp (widened, optionally reversed)
///
/// # Errors
/// Returns `InvalidArgument` if the configuration does not validate.
pub fn convert_colors(colors: &Grid<u32>, config: &AsciiConfig) -> Result<Grid<char>> {
    config.validate()?;
    to_glyphs(colors, config)
}

/// Body of [`convert_colors`] for callers that already validated `config`
fn to_glyphs(colors: &Grid<u32>, config: &AsciiConfig) -> Result<Grid<char>> {
    let ramp = config.effective_ramp()?;

    debug!(
        "Quantizing {}x{} cells onto {} glyphs ({}, dithering: {})",
        colors.rows(),
        colors.cols(),
        ramp.len(),
        config.reducer,
        config.dithering
    );

    let lum = brightness(colors, config.reducer);
    Ok(quantize_grid(&lum, &ramp, config.dithering))
}

/// Convert a decoded image to ASCII art text
///
/// The image is shrunk by `config.scale_factor` before conversion.
pub fn convert_image(image: &DynamicImage, config: &AsciiConfig) -> Result<String> {
    config.validate()?;
    let colors = image_to_colors(image, config.scale_factor)?;
    render(&to_glyphs(&colors, config)?, config.horizontal_magnification)
}

/// Decode the image at `path` and convert it to ASCII art text
///
/// # Errors
/// `NotFound`, `Decode`, or `InvalidArgument`; no partial output is returned.
pub fn convert_path(path: impl AsRef<Path>, config: &AsciiConfig) -> Result<String> {
    config.validate()?;
    let colors = load_colors(path, config.scale_factor)?;
    render(&to_glyphs(&colors, config)?, config.horizontal_magnification)
}
