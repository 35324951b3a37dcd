//! Packed color decomposition
//!
//! Colors travel through the pipeline as `0xRRGGBB` integers, one per pixel.
//! Bits above the low 24 are ignored when splitting and never produced when
//! combining.

use crate::error::Result;
use crate::grid::{Block, Grid};

/// Normalized RGB triple, each component semantically in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decompose a packed color into normalized channels
    pub fn from_packed(color: u32) -> Self {
        let [r, g, b] = split_channels(color);
        Self::new(normalize(r), normalize(g), normalize(b))
    }
}

/// Split a packed `0xRRGGBB` color into its 8-bit channels
///
/// Input outside `[0, 0xFFFFFF]` is not rejected: the high byte is simply
/// masked away.
pub fn split_channels(color: u32) -> [u8; 3] {
    [
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    ]
}

/// Inverse of [`split_channels`]
///
/// Takes `u32` channels so that oversized values can be passed in; each one
/// is masked to its low 8 bits rather than rejected.
pub fn combine_channels(r: u32, g: u32, b: u32) -> u32 {
    ((r << 16) & 0xff0000) | ((g << 8) & 0x00ff00) | (b & 0x0000ff)
}

/// Map an 8-bit channel to [0.0, 1.0]
pub fn normalize(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Average a block of packed colors channel by channel
///
/// Channel sums are accumulated as `u64` and divided with integer division,
/// so the result truncates toward zero. An empty block averages to black.
pub fn average_rgb_block(block: Block<'_, u32>) -> u32 {
    if block.is_empty() {
        return 0;
    }

    let sums = block.iter().fold([0u64; 3], |mut acc, &color| {
        for (sum, channel) in acc.iter_mut().zip(split_channels(color)) {
            *sum += u64::from(channel);
        }
        acc
    });

    let count = block.len() as u64;
    combine_channels(
        (sums[0] / count) as u32,
        (sums[1] / count) as u32,
        (sums[2] / count) as u32,
    )
}

/// Downscale a color grid by averaging `factor × factor` blocks
///
/// Edge blocks that do not fill a whole `factor × factor` square are averaged
/// over the cells they do have.
///
/// # Errors
/// Returns `InvalidArgument` if `factor` is zero.
pub fn downsample_average(colors: &Grid<u32>, factor: usize) -> Result<Grid<u32>> {
    colors.reduce_blocks(factor, factor, average_rgb_block)
}
