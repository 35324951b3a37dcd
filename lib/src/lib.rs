//! ASCII Ramp - image to ASCII art converter
//!
//! Pixels are reduced to a brightness value, optionally dithered with
//! Floyd-Steinberg error diffusion, and quantized onto an ordered ramp of
//! glyphs running from dense to light.
//!
//! # Example
//! ```no_run
//! use ascii_ramp::{convert_path, AsciiConfig};
//!
//! let config = AsciiConfig {
//!     scale_factor: 6,
//!     dithering: true,
//!     ..Default::default()
//! };
//! let text = convert_path("photo.png", &config).unwrap();
//! print!("{}", text);
//! ```

pub mod ascii;
pub mod color;
pub mod config;
pub mod dither;
pub mod error;
pub mod grid;
pub mod loader;
pub mod luminance;
pub mod lut;
pub mod mapping;
pub mod processor;

// Re-export main types for convenience
pub use config::AsciiConfig;
pub use error::{AsciiError, Result};
pub use grid::{Block, Grid};
pub use luminance::Reducer;
pub use lut::Preset;
pub use mapping::{InvertibleMapping, Ramp};
pub use processor::{convert_colors, convert_image, convert_path};
