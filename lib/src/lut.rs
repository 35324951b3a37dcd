//! Glyph density ramps
//!
//! Every ramp here is ordered from the densest glyph to the lightest, and
//! ends in a space so that widening biases toward blank cells.

use crate::error::AsciiError;
use std::fmt;
use std::str::FromStr;

/// Hand-picked 29-step ramp
pub const DENSITY_29: &str = "Ñ@#W$9876543210?!abc;:+=-,._ ";

/// 29-step ramp measured from JetBrains Mono ink coverage
pub const DENSITY_29_CALIBRATED: &str = "@Ñ&æÄÜB½#dòêàñé5axTÎct(ª*¡;¯ ";

/// 58-step ramp measured from JetBrains Mono ink coverage
pub const DENSITY_58_CALIBRATED: &str =
    "@MÑ©ÒÐæÅÄm8ÚBÇ6AXõböóÝ¥ÿûSV3úkhÞ¢y±fn]>v}1«ÍLjº³²*I¡~;'¯· ";

/// Named ramp with its output-file suffix and default brightness shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    #[default]
    Density29,
    Density29Calibrated,
    Density58Calibrated,
}

impl Preset {
    pub const ALL: [Preset; 3] = [
        Preset::Density29,
        Preset::Density29Calibrated,
        Preset::Density58Calibrated,
    ];

    pub fn glyphs(self) -> &'static str {
        match self {
            Preset::Density29 => DENSITY_29,
            Preset::Density29Calibrated => DENSITY_29_CALIBRATED,
            Preset::Density58Calibrated => DENSITY_58_CALIBRATED,
        }
    }

    /// Appended to the input file stem when naming output files
    pub fn suffix(self) -> &'static str {
        match self {
            Preset::Density29 => "_29",
            Preset::Density29Calibrated => "_29c",
            Preset::Density58Calibrated => "_58c",
        }
    }

    /// Extra copies of the lightest glyph that suit this ramp
    pub fn brightness_shift(self) -> usize {
        match self {
            Preset::Density29 | Preset::Density29Calibrated => 8,
            Preset::Density58Calibrated => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Density29 => "density-29",
            Preset::Density29Calibrated => "density-29c",
            Preset::Density58Calibrated => "density-58c",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Preset {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AsciiError::invalid(format!("unknown preset '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lengths() {
        assert_eq!(Preset::Density29.glyphs().chars().count(), 29);
        assert_eq!(Preset::Density29Calibrated.glyphs().chars().count(), 29);
        assert_eq!(Preset::Density58Calibrated.glyphs().chars().count(), 58);
    }

    #[test]
    fn test_presets_end_in_space() {
        for preset in Preset::ALL {
            assert_eq!(preset.glyphs().chars().last(), Some(' '));
        }
    }

    #[test]
    fn test_preset_glyphs_are_unique() {
        for preset in Preset::ALL {
            let mut glyphs: Vec<char> = preset.glyphs().chars().collect();
            let total = glyphs.len();
            glyphs.sort_unstable();
            glyphs.dedup();
            assert_eq!(glyphs.len(), total, "{} has duplicates", preset);
        }
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("density-58c".parse::<Preset>().unwrap(), Preset::Density58Calibrated);
        assert!("density-7".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_suffixes() {
        assert_eq!(Preset::Density29.suffix(), "_29");
        assert_eq!(Preset::Density58Calibrated.brightness_shift(), 16);
    }
}
