use crate::error::{AsciiError, Result};
use crate::luminance::Reducer;
use crate::lut::Preset;
use crate::mapping::Ramp;

/// Configuration for one image-to-text conversion
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Density ramp, densest glyph first by convention
    pub ramp: Vec<char>,
    /// Extra copies of the last glyph appended before quantizing, default 8
    pub brightness_shift: usize,

    /// Integer downscale factor applied at load time, default 1 (no scaling)
    pub scale_factor: u32,
    /// Channel reduction, default BT.709 luminance
    pub reducer: Reducer,

    /// Times each glyph is repeated horizontally, default 2
    pub horizontal_magnification: usize,

    pub reverse_ramp: bool, // default false
    pub dithering: bool,    // default false
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl AsciiConfig {
    /// Default settings using `preset`'s glyphs and brightness shift
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            ramp: preset.glyphs().chars().collect(),
            brightness_shift: preset.brightness_shift(),

            scale_factor: 1,
            reducer: Reducer::default(),

            horizontal_magnification: 2,

            reverse_ramp: false,
            dithering: false,
        }
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.ramp.len() < 2 {
            return Err(AsciiError::invalid(format!(
                "ramp must have at least 2 glyphs, got {}",
                self.ramp.len()
            )));
        }
        if self.scale_factor < 1 {
            return Err(AsciiError::invalid(format!(
                "scale_factor must be at least 1, got {}",
                self.scale_factor
            )));
        }
        if self.horizontal_magnification < 1 {
            return Err(AsciiError::invalid(format!(
                "horizontal_magnification must be at least 1, got {}",
                self.horizontal_magnification
            )));
        }
        Ok(())
    }

    /// The ramp actually used for quantizing: widened, then optionally reversed
    pub fn effective_ramp(&self) -> Result<Ramp<char>> {
        let ramp = Ramp::new(self.ramp.clone())?.widened(self.brightness_shift);
        Ok(if self.reverse_ramp {
            ramp.reversed()
        } else {
            ramp
        })
    }
}
