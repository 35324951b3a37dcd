//! ascii-ramp CLI - convert images to density-ramp ASCII art

mod batch;

use anyhow::{Context, Result, bail};
use ascii_ramp::{AsciiConfig, Preset, Reducer, convert_path};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ascii-ramp", about = "Convert images to density-ramp ASCII art")]
struct Cli {
    /// Input images, or directories to scan for images
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Density ramp preset: density-29, density-29c, density-58c
    #[arg(short, long, default_value_t = Preset::Density29)]
    preset: Preset,
    /// Literal ramp overriding the preset, densest glyph first
    #[arg(long)]
    ramp: Option<String>,
    /// Extra copies of the lightest glyph (defaults to the preset's shift)
    #[arg(long)]
    shift: Option<usize>,
    /// Integer downscale factor
    #[arg(short, long, default_value_t = 1)]
    scale: u32,
    /// Brightness reducer: average, luminance-601, luminance-709, luminance-ntsc,
    /// max, min, desaturation, red, green, blue
    #[arg(short, long, default_value_t = Reducer::Luminance709)]
    reducer: Reducer,
    /// Times each glyph is repeated horizontally
    #[arg(short, long, default_value_t = 2)]
    magnification: usize,
    /// Write the `_reversed` rendering (dense glyphs for dark pixels)
    #[arg(long)]
    reverse: bool,
    /// Write both the normal and the reversed rendering
    #[arg(long, conflicts_with = "reverse")]
    both: bool,
    /// Apply Floyd-Steinberg dithering before quantizing
    #[arg(short, long)]
    dither: bool,
    /// Directory for output files (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Print to stdout instead of writing files
    #[arg(long, conflicts_with_all = ["output_dir", "both"])]
    stdout: bool,
    /// Stop at the first image that fails
    #[arg(long)]
    fail_fast: bool,
    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> Result<AsciiConfig> {
        let mut config = AsciiConfig::from_preset(self.preset);
        if let Some(ref ramp) = self.ramp {
            config.ramp = ramp.chars().collect();
        }
        if let Some(shift) = self.shift {
            config.brightness_shift = shift;
        }
        config.scale_factor = self.scale;
        config.reducer = self.reducer;
        config.horizontal_magnification = self.magnification;
        config.dithering = self.dither;

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    fn suffix(&self) -> &str {
        if self.ramp.is_some() {
            "_custom"
        } else {
            self.preset.suffix()
        }
    }

    /// Ramp orientations to render for every image
    fn orientations(&self) -> Vec<bool> {
        if self.both {
            vec![false, true]
        } else {
            vec![self.reverse]
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let config = cli.config()?;
    let files = batch::discover(&cli.inputs)?;
    if files.is_empty() {
        bail!("No images found");
    }

    if let Some(ref dir) = cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut failures = 0;
    for file in &files {
        for reversed in cli.orientations() {
            let config = batch::orientation_config(&config, reversed);
            match convert_one(&cli, file, &config, reversed) {
                Ok(()) => {}
                Err(e) if cli.fail_fast => return Err(e),
                Err(e) => {
                    log::error!("{:#}", e);
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} conversions failed", failures, files.len() * cli.orientations().len());
    }
    Ok(())
}

fn convert_one(cli: &Cli, file: &Path, config: &AsciiConfig, reversed: bool) -> Result<()> {
    let text = convert_path(file, config)
        .with_context(|| format!("Failed to convert {}", file.display()))?;

    if cli.stdout {
        print!("{}", text);
        return Ok(());
    }

    let output = batch::output_path(file, cli.output_dir.as_deref(), cli.suffix(), reversed);
    std::fs::write(&output, text)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("{} -> {}", file.display(), output.display());
    Ok(())
}
