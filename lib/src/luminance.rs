//! Brightness reducers: normalized RGB triple → one scalar
//!
//! Every weighted reducer's coefficients sum to 1.0, so white maps to 1.0 and
//! black to 0.0. Keep it that way when adding new weightings.

use crate::color::Rgb;
use crate::error::AsciiError;
use std::fmt;
use std::str::FromStr;

/// ITU-R BT.601 luma weights
pub const BT601: [f64; 3] = [0.299, 0.587, 0.114];

/// ITU-R BT.709 luma weights
pub const BT709: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// NTSC-like perceptual weights
pub const NTSC: [f64; 3] = [0.3, 0.59, 0.11];

/// Selectable channel reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Reducer {
    Average,
    Luminance601,
    #[default]
    Luminance709,
    LuminanceNtsc,
    Max,
    Min,
    Desaturation,
    Red,
    Green,
    Blue,
}

impl Reducer {
    pub const ALL: [Reducer; 10] = [
        Reducer::Average,
        Reducer::Luminance601,
        Reducer::Luminance709,
        Reducer::LuminanceNtsc,
        Reducer::Max,
        Reducer::Min,
        Reducer::Desaturation,
        Reducer::Red,
        Reducer::Green,
        Reducer::Blue,
    ];

    /// Reduce `rgb` to a brightness scalar
    pub fn apply(self, rgb: Rgb) -> f64 {
        match self {
            Reducer::Average => average(rgb),
            Reducer::Luminance601 => weighted(BT601, rgb),
            Reducer::Luminance709 => weighted(BT709, rgb),
            Reducer::LuminanceNtsc => weighted(NTSC, rgb),
            Reducer::Max => max_channel(rgb),
            Reducer::Min => min_channel(rgb),
            Reducer::Desaturation => desaturation(rgb),
            Reducer::Red => rgb.r,
            Reducer::Green => rgb.g,
            Reducer::Blue => rgb.b,
        }
    }

    /// Kebab-case name, as accepted by [`Reducer::from_str`]
    pub fn name(self) -> &'static str {
        match self {
            Reducer::Average => "average",
            Reducer::Luminance601 => "luminance-601",
            Reducer::Luminance709 => "luminance-709",
            Reducer::LuminanceNtsc => "luminance-ntsc",
            Reducer::Max => "max",
            Reducer::Min => "min",
            Reducer::Desaturation => "desaturation",
            Reducer::Red => "red",
            Reducer::Green => "green",
            Reducer::Blue => "blue",
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Reducer {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reducer::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AsciiError::invalid(format!("unknown reducer '{}'", s)))
    }
}

/// Weighted channel sum
pub fn weighted([wr, wg, wb]: [f64; 3], rgb: Rgb) -> f64 {
    wr * rgb.r + wg * rgb.g + wb * rgb.b
}

pub fn average(rgb: Rgb) -> f64 {
    (rgb.r + rgb.g + rgb.b) / 3.0
}

pub fn max_channel(rgb: Rgb) -> f64 {
    rgb.r.max(rgb.g).max(rgb.b)
}

pub fn min_channel(rgb: Rgb) -> f64 {
    rgb.r.min(rgb.g).min(rgb.b)
}

/// Midpoint of the brightest and darkest channel
pub fn desaturation(rgb: Rgb) -> f64 {
    (max_channel(rgb) + min_channel(rgb)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    #[test]
    fn test_weights_sum_to_one() {
        for weights in [BT601, BT709, NTSC] {
            assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_all_reducers_map_white_and_black() {
        for reducer in Reducer::ALL {
            assert!(
                (reducer.apply(WHITE) - 1.0).abs() < 1e-12,
                "{} on white",
                reducer
            );
            assert_eq!(reducer.apply(BLACK), 0.0, "{} on black", reducer);
        }
    }

    #[test]
    fn test_channel_extremes() {
        let rgb = Rgb::new(0.2, 0.9, 0.4);
        assert_eq!(Reducer::Max.apply(rgb), 0.9);
        assert_eq!(Reducer::Min.apply(rgb), 0.2);
        assert!((Reducer::Desaturation.apply(rgb) - 0.55).abs() < 1e-12);
        assert!((Reducer::Average.apply(rgb) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_projections() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(Reducer::Red.apply(rgb), 0.1);
        assert_eq!(Reducer::Green.apply(rgb), 0.2);
        assert_eq!(Reducer::Blue.apply(rgb), 0.3);
    }

    #[test]
    fn test_bt709_green_dominates() {
        let green = Reducer::Luminance709.apply(Rgb::new(0.0, 1.0, 0.0));
        let blue = Reducer::Luminance709.apply(Rgb::new(0.0, 0.0, 1.0));
        assert!(green > blue);
        assert_eq!(green, 0.7152);
    }

    #[test]
    fn test_parse_names() {
        for reducer in Reducer::ALL {
            assert_eq!(reducer.name().parse::<Reducer>().unwrap(), reducer);
        }
        assert_eq!("LUMINANCE-601".parse::<Reducer>().unwrap(), Reducer::Luminance601);
        assert!("sepia".parse::<Reducer>().is_err());
    }
}
