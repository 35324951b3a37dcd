//! Floyd-Steinberg error diffusion over brightness grids
//!
//! The pass is sequential by nature: every cell depends on error pushed to it
//! by cells visited earlier, so it walks row-major, top to bottom and left to
//! right, on a private `f64` buffer.

use crate::grid::Grid;
use crate::mapping::InvertibleMapping;

/// An error diffusion kernel
///
/// Each entry is `(dx, dy, weight)`; a neighbor receives
/// `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub entries: &'static [(isize, usize, u8)],
    pub divisor: u8,
}

/// Floyd-Steinberg kernel, 100% error propagation (16/16)
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Dither a brightness grid in place of its snapped values
///
/// `closest_palette_colour` snaps any scalar to the nearest representable
/// output value and should clamp values outside [0, 1]. For a [`Ramp`]
/// this is [`Ramp::snap`].
///
/// [`Ramp`]: crate::mapping::Ramp
/// [`Ramp::snap`]: crate::mapping::Ramp::snap
pub fn floyd_steinberg(grid: &Grid<f64>, closest_palette_colour: impl Fn(f64) -> f64) -> Grid<f64> {
    floyd_steinberg_with(grid, closest_palette_colour, &InvertibleMapping::identity())
}

/// Dither a grid of any element type through its `f64` representation
///
/// Every cell is converted with `mapping.map`, dithered, and converted back
/// with `mapping.inverse_map`.
pub fn floyd_steinberg_with<T: Clone>(
    grid: &Grid<T>,
    closest_palette_colour: impl Fn(f64) -> f64,
    mapping: &InvertibleMapping<T, f64>,
) -> Grid<T> {
    let (rows, cols) = grid.dimensions();
    let mut values = grid.map(|cell| mapping.map(cell.clone())).into_vec();

    diffuse(&mut values, rows, cols, &FLOYD_STEINBERG, closest_palette_colour);

    Grid::from_fn(rows, cols, |row, col| {
        mapping.inverse_map(values[row * cols + col])
    })
}

/// Quantize `values` in place with error diffusion
///
/// Returns the error that fell off the grid edges, which is exactly the
/// difference between the input and output sums.
pub(crate) fn diffuse(
    values: &mut [f64],
    rows: usize,
    cols: usize,
    kernel: &Kernel,
    closest_palette_colour: impl Fn(f64) -> f64,
) -> f64 {
    debug_assert_eq!(values.len(), rows * cols);
    let divisor = f64::from(kernel.divisor);
    let mut lost = 0.0;

    for row in 0..rows {
        for col in 0..cols {
            let idx = row * cols + col;
            let old = values[idx];
            let new = closest_palette_colour(old);
            let error = old - new;
            values[idx] = new;

            for &(dx, dy, weight) in kernel.entries {
                let share = error * f64::from(weight) / divisor;
                let target_row = row + dy;
                match col.checked_add_signed(dx) {
                    Some(target_col) if target_col < cols && target_row < rows => {
                        values[target_row * cols + target_col] += share;
                    }
                    _ => lost += share,
                }
            }
        }
    }

    lost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Ramp;

    #[test]
    fn test_kernel_weights_sum_to_divisor() {
        let total: u32 = FLOYD_STEINBERG
            .entries
            .iter()
            .map(|&(_, _, w)| u32::from(w))
            .sum();
        assert_eq!(total, u32::from(FLOYD_STEINBERG.divisor));
    }

    #[test]
    fn test_single_cell_equals_closest_colour() {
        let ramp = Ramp::from_chars("#.:").unwrap();
        let grid = Grid::from_rows(vec![vec![0.42]]).unwrap();
        let dithered = floyd_steinberg(&grid, |d| ramp.snap(d));
        assert_eq!(dithered[(0, 0)], ramp.snap(0.42));
    }

    #[test]
    fn test_identity_palette_is_noop() {
        let grid = Grid::from_fn(4, 5, |r, c| (r * 5 + c) as f64 / 20.0);
        assert_eq!(floyd_steinberg(&grid, |d| d), grid);
    }

    #[test]
    fn test_error_reaches_right_and_below() {
        // One-bit palette: 0.0 or 1.0
        let snap = |d: f64| if d < 0.5 { 0.0 } else { 1.0 };
        let grid = Grid::from_rows(vec![vec![0.4, 0.3], vec![0.2, 0.3]]).unwrap();
        let mut values = grid.values().to_vec();
        diffuse(&mut values, 2, 2, &FLOYD_STEINBERG, snap);

        // (0,0): 0.4 -> 0, pushes 0.175 right, 0.125 below, 0.025 below-right
        // (0,1): 0.475 -> 0, pushes 0.0890625 below-left, 0.1484375 below
        // (1,0): 0.4140625 -> 0, pushes 0.18115234375 right
        // (1,1): 0.3 + 0.025 + 0.1484375 + 0.18115234375 -> 1
        assert_eq!(values, vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_error_is_conserved_except_at_edges() {
        let ramp = Ramp::from_chars("@%#*+=-:. ").unwrap();
        let grid = Grid::from_fn(7, 9, |r, c| ((r * 13 + c * 7) % 10) as f64 / 10.0 + 0.03);
        let before: f64 = grid.values().iter().sum();

        let mut values = grid.values().to_vec();
        let lost = diffuse(&mut values, 7, 9, &FLOYD_STEINBERG, |d| ramp.snap(d));
        let after: f64 = values.iter().sum();

        assert!((before - after - lost).abs() < 1e-9);
    }

    #[test]
    fn test_order_is_row_major() {
        // The first row sees no error from below, so it matches a 1-row run
        let snap = |d: f64| if d < 0.5 { 0.0 } else { 1.0 };
        let grid = Grid::from_fn(3, 6, |_, c| 0.2 + c as f64 * 0.1);
        let full = floyd_steinberg(&grid, snap);
        let first_row = Grid::from_rows(vec![grid.row(0).to_vec()]).unwrap();
        let single = floyd_steinberg(&first_row, snap);
        assert_eq!(full.row(0), single.row(0));
    }

    #[test]
    fn test_mid_gray_mixes_glyphs() {
        let ramp = Ramp::from_chars("#.").unwrap();
        let grid = Grid::from_fn(10, 10, |_, _| 0.3);
        let dithered = floyd_steinberg(&grid, |d| ramp.snap(d));

        let light = dithered.values().iter().filter(|&&d| d == ramp.midpoint(1)).count();
        assert!(light > 0 && light < 30, "got {} light cells", light);
        assert!(dithered.values().iter().all(|&d| d == 0.25 || d == 0.75));
    }

    #[test]
    fn test_dither_glyph_grid_through_mapping() {
        let ramp = Ramp::from_chars("#.").unwrap();
        let mapping = ramp.invertible().flip();
        let glyphs = Grid::from_rows(vec![vec!['#', '.'], vec!['.', '#']]).unwrap();

        // Glyphs are already palette values, so there is no error to diffuse
        let dithered = floyd_steinberg_with(&glyphs, |d| ramp.snap(d), &mapping);
        assert_eq!(dithered, glyphs);
    }

    #[test]
    fn test_dither_byte_levels_carries_error() {
        // Two-level palette over 8-bit gray values
        let palette = Ramp::new(vec![0u32, 255]).unwrap();
        let mapping = InvertibleMapping::new(
            |v: u32| f64::from(v) / 255.0,
            |d: f64| (d * 255.0).round() as u32,
        );
        let closest = |d: f64| f64::from(palette.quantize(d)) / 255.0;
        let grid = Grid::from_rows(vec![vec![100u32, 100]]).unwrap();

        // Undithered, both cells snap to black
        assert_eq!(grid.map(|&v| palette.quantize(mapping.map(v))).values(), &[0, 0]);

        // 100/255 -> 0 pushes 7/16 of 0.392 right, lifting the second cell past 0.5
        let dithered = floyd_steinberg_with(&grid, closest, &mapping);
        assert_eq!(dithered.values(), &[0, 255]);
    }
}
