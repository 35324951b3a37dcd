//! Quantization between brightness scalars and density ramps
//!
//! A [`Ramp`] of `N` glyphs splits [0, 1] into `N` equal bins. The forward
//! direction picks the glyph whose bin contains a brightness value; the
//! inverse direction returns the midpoint of a glyph's bin. The pair is
//! bundled as an [`InvertibleMapping`] for error diffusion.

use crate::error::{AsciiError, Result};

/// Forward/inverse function pair
///
/// Nothing requires the two directions to be a true bijection: a ramp maps a
/// continuum onto finitely many glyphs and back onto one representative each.
pub struct InvertibleMapping<A, B> {
    forward: Box<dyn Fn(A) -> B + Send + Sync>,
    inverse: Box<dyn Fn(B) -> A + Send + Sync>,
}

impl<A, B> InvertibleMapping<A, B> {
    pub fn new(
        forward: impl Fn(A) -> B + Send + Sync + 'static,
        inverse: impl Fn(B) -> A + Send + Sync + 'static,
    ) -> Self {
        Self {
            forward: Box::new(forward),
            inverse: Box::new(inverse),
        }
    }

    pub fn map(&self, value: A) -> B {
        (self.forward)(value)
    }

    pub fn inverse_map(&self, value: B) -> A {
        (self.inverse)(value)
    }

    /// Swap the two directions
    pub fn flip(self) -> InvertibleMapping<B, A> {
        InvertibleMapping {
            forward: self.inverse,
            inverse: self.forward,
        }
    }
}

impl InvertibleMapping<f64, f64> {
    /// `f64 ↔ f64` identity, for grids that already hold brightness values
    pub fn identity() -> Self {
        Self::new(|d| d, |d| d)
    }
}

/// Ordered glyph sequence from one end of visual density to the other
///
/// Duplicates are allowed; they only make the inverse direction lossy, since
/// [`Ramp::unquantize`] always resolves a glyph to its first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp<T> {
    glyphs: Vec<T>,
}

impl Ramp<char> {
    /// One glyph per `char` of `s`
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `s` has fewer than two characters.
    pub fn from_chars(s: &str) -> Result<Self> {
        Self::new(s.chars().collect())
    }
}

impl<T: Clone + PartialEq> Ramp<T> {
    /// # Errors
    /// Returns `InvalidArgument` if fewer than two glyphs are given.
    pub fn new(glyphs: Vec<T>) -> Result<Self> {
        if glyphs.len() < 2 {
            return Err(AsciiError::invalid(format!(
                "density ramp needs at least 2 glyphs, got {}",
                glyphs.len()
            )));
        }
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[T] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a ramp holds at least two glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Append `extra` copies of the last glyph
    ///
    /// Widening hands a larger share of [0, 1] to the final glyph, which
    /// compensates for displays that render mid-tones too dark.
    pub fn widened(&self, extra: usize) -> Self {
        let mut glyphs = self.glyphs.clone();
        if let Some(last) = self.glyphs.last() {
            glyphs.extend(std::iter::repeat_n(last.clone(), extra));
        }
        Self { glyphs }
    }

    pub fn reversed(&self) -> Self {
        Self {
            glyphs: self.glyphs.iter().rev().cloned().collect(),
        }
    }

    /// Bin index for brightness `d`: `min(floor(d * N), N - 1)`
    ///
    /// The last bin is closed on the right, so exactly 1.0 lands in it.
    /// Callers should keep `d` in [0, 1]; negative and NaN inputs saturate to
    /// bin 0 and anything past 1.0 to the last bin.
    pub fn bin(&self, d: f64) -> usize {
        let n = self.glyphs.len();
        ((d * n as f64) as usize).min(n - 1)
    }

    /// Nearest glyph for brightness `d`
    pub fn quantize(&self, d: f64) -> T {
        self.glyphs[self.bin(d)].clone()
    }

    /// Midpoint of bin `index`: `index / N + 0.5 / N`
    pub fn midpoint(&self, index: usize) -> f64 {
        let n = self.glyphs.len() as f64;
        index as f64 / n + 0.5 / n
    }

    /// Representative brightness of `glyph`, or `None` if it is not in the ramp
    pub fn unquantize(&self, glyph: &T) -> Option<f64> {
        self.glyphs
            .iter()
            .position(|g| g == glyph)
            .map(|idx| self.midpoint(idx))
    }

    /// Snap `d` to the brightness of its nearest glyph
    ///
    /// This is `unquantize ∘ quantize`, the palette snapping function used by
    /// error diffusion.
    pub fn snap(&self, d: f64) -> f64 {
        self.midpoint(self.bin(d))
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Ramp<T> {
    /// Brightness → glyph mapping with glyph → bin midpoint as its inverse
    ///
    /// Glyphs missing from the ramp map back to 0.0.
    pub fn invertible(&self) -> InvertibleMapping<f64, T> {
        let forward = self.clone();
        let inverse = self.clone();
        InvertibleMapping::new(
            move |d| forward.quantize(d),
            move |glyph| inverse.unquantize(&glyph).unwrap_or(0.0),
        )
    }
}
