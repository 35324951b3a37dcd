//! ramp-calibrate - measure glyph ink coverage in a font and print density ramps
//!
//! This is a one-off offline tool: its output is a string literal to paste
//! into a ramp preset, it plays no part in converting images.

use anyhow::{Context, Result, bail};
use clap::Parser;
use fontdue::{Font, FontSettings};
use std::cmp::Ordering;
use std::path::PathBuf;

/// First and last code points measured (Basic Latin and Latin-1)
const START_RANGE: u32 = 32;
const END_RANGE: u32 = 0xff;

#[derive(Parser)]
#[command(name = "ramp-calibrate", about = "Build density ramps from a font's ink coverage")]
struct Args {
    /// Font file (TTF or OTF)
    font: PathBuf,
    /// Ramp lengths to print
    #[arg(short, long, value_delimiter = ',', default_values_t = [29, 58])]
    bins: Vec<usize>,
    /// Rasterization size in pixels, also used as the baseline offset
    #[arg(long, default_value_t = 24.0)]
    size: f32,
    /// Side of the square cell each glyph is drawn into
    #[arg(long, default_value_t = 32)]
    cell: usize,
    /// Print every measured glyph with its coverage
    #[arg(short, long)]
    verbose: bool,
}

/// Glyphs sorted from most to least ink
struct FontAnalyzer {
    glyphs_by_density: Vec<(char, f64)>,
}

impl FontAnalyzer {
    fn new(font: &Font, size: f32, cell: usize) -> Self {
        let densities = (START_RANGE..=END_RANGE)
            .filter_map(char::from_u32)
            .filter(|c| !c.is_control())
            .filter(|&c| font.lookup_glyph_index(c) != 0)
            .map(|c| (c, ink_coverage(font, c, size, cell)))
            .collect();
        Self::from_densities(densities)
    }

    /// Drop blank glyphs and sort the rest densest first
    fn from_densities(mut densities: Vec<(char, f64)>) -> Self {
        densities.retain(|&(_, d)| d > 0.0);
        densities.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        densities.reverse();
        Self {
            glyphs_by_density: densities,
        }
    }

    /// Evenly sample `bins - 1` glyphs from densest to lightest, then a space
    fn glyphs_for_bins(&self, bins: usize) -> Result<Vec<char>> {
        if bins < 2 {
            bail!("a ramp needs at least 2 bins, got {}", bins);
        }
        if self.glyphs_by_density.is_empty() {
            bail!("the font has no visible glyphs in the measured range");
        }

        let count = self.glyphs_by_density.len();
        let step = count as f64 / (bins - 1) as f64;
        let mut glyphs: Vec<char> = (0..bins - 1)
            .map(|i| {
                let idx = ((i as f64 * step).round() as usize).min(count - 1);
                self.glyphs_by_density[idx].0
            })
            .collect();
        glyphs.push(' ');
        Ok(glyphs)
    }
}

/// Fraction of a `cell × cell` square touched by `ch` drawn on a baseline at `size`
fn ink_coverage(font: &Font, ch: char, size: f32, cell: usize) -> f64 {
    let (metrics, bitmap) = font.rasterize(ch, size);
    if metrics.width == 0 || metrics.height == 0 || cell == 0 {
        return 0.0;
    }

    let baseline = size as i32;
    let top = baseline - metrics.height as i32 - metrics.ymin;
    let left = metrics.xmin;

    let mut inked = 0usize;
    for sy in 0..metrics.height {
        for sx in 0..metrics.width {
            let x = left + sx as i32;
            let y = top + sy as i32;
            let inside = (0..cell as i32).contains(&x) && (0..cell as i32).contains(&y);
            if inside && bitmap[sy * metrics.width + sx] != 0 {
                inked += 1;
            }
        }
    }

    inked as f64 / (cell * cell) as f64
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = std::fs::read(&args.font)
        .with_context(|| format!("Failed to read font {}", args.font.display()))?;
    let font = Font::from_bytes(data, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to parse font {}: {}", args.font.display(), e))?;

    let analyzer = FontAnalyzer::new(&font, args.size, args.cell);
    log::info!(
        "Measured {} visible glyphs in {}",
        analyzer.glyphs_by_density.len(),
        args.font.display()
    );

    if args.verbose {
        for (idx, (ch, density)) in analyzer.glyphs_by_density.iter().enumerate() {
            println!("{} {} {}", idx, ch, density);
        }
    }

    for bins in args.bins {
        let glyphs: String = analyzer.glyphs_for_bins(bins)?.into_iter().collect();
        println!("{} quantization: \"{}\"", bins, glyphs);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> FontAnalyzer {
        FontAnalyzer::from_densities(vec![
            ('.', 0.05),
            ('@', 0.60),
            (' ', 0.0),
            ('#', 0.45),
            (':', 0.10),
            ('+', 0.20),
        ])
    }

    #[test]
    fn test_blank_glyphs_dropped_and_sorted_densest_first() {
        let chars: Vec<char> = analyzer().glyphs_by_density.iter().map(|g| g.0).collect();
        assert_eq!(chars, vec!['@', '#', '+', ':', '.']);
    }

    #[test]
    fn test_glyphs_for_bins_ends_in_space() {
        let glyphs = analyzer().glyphs_for_bins(3).unwrap();
        // step = 5 / 2 = 2.5, indices 0 and round(2.5) = 3
        assert_eq!(glyphs, vec!['@', ':', ' ']);
    }

    #[test]
    fn test_glyphs_for_bins_clamps_index() {
        // step = 5 / 9, last sampled index round(8 * 5 / 9) = 4 stays in range
        let glyphs = analyzer().glyphs_for_bins(10).unwrap();
        assert_eq!(glyphs.len(), 10);
        assert_eq!(glyphs[0], '@');
        assert_eq!(glyphs[9], ' ');
    }

    #[test]
    fn test_glyphs_for_bins_rejects_single_bin() {
        assert!(analyzer().glyphs_for_bins(1).is_err());
    }

    #[test]
    fn test_empty_font_rejected() {
        let empty = FontAnalyzer::from_densities(vec![(' ', 0.0)]);
        assert!(empty.glyphs_for_bins(29).is_err());
    }
}
