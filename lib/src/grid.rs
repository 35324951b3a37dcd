//! Generic 2D container
//!
//! A [`Grid`] is an immutable rectangular array stored row-major. Every
//! transformation produces a new grid; the only in-place numeric work in the
//! crate happens on a private working buffer inside the dithering pass.

use crate::error::{AsciiError, Result};
use rayon::prelude::*;
use std::ops::Index;

/// Rectangular array of `rows × cols` values, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    /// Build a grid from a list of rows
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(AsciiError::invalid(format!(
                "row {} has {} columns, expected {}",
                idx,
                row.len(),
                cols
            )));
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: row_count,
            cols,
        })
    }

    /// Build a grid from row-major data
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(AsciiError::invalid(format!(
                "{} values cannot fill a {}x{} grid",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow one row as a slice
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "Row index out of bounds");
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// All values in row-major order
    pub fn values(&self) -> &[T] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        let mut data = self.data.into_iter();
        (0..self.rows)
            .map(|_| data.by_ref().take(cols).collect())
            .collect()
    }

    /// Apply `f` to every element, preserving shape
    pub fn map<S>(&self, f: impl FnMut(&T) -> S) -> Grid<S> {
        Grid {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Sub-grid view covering `rows × cols` cells starting at `(row0, col0)`
    fn block(&self, row0: usize, col0: usize, rows: usize, cols: usize) -> Block<'_, T> {
        Block {
            grid: self,
            row0,
            col0,
            rows,
            cols,
        }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Sync> Grid<T> {
    /// Parallel version of [`Grid::map`]
    ///
    /// Each output cell is computed independently, so the result is identical
    /// to `map` for any pure `f`.
    pub fn par_map<S: Send>(&self, f: impl Fn(&T) -> S + Sync + Send) -> Grid<S> {
        Grid {
            data: self.data.par_iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Downsample by grouping the grid into `chunk_height × chunk_width` blocks
    /// and reducing each block to one value
    ///
    /// The final row group and column group are truncated to whatever remains
    /// when the dimensions are not divisible by the chunk size; they are never
    /// padded. The output has `ceil(rows / chunk_height) × ceil(cols / chunk_width)`
    /// cells. Blocks are reduced in parallel.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if either chunk dimension is zero.
    pub fn reduce_blocks<S, F>(
        &self,
        chunk_height: usize,
        chunk_width: usize,
        reducer: F,
    ) -> Result<Grid<S>>
    where
        S: Send,
        F: Fn(Block<'_, T>) -> S + Sync + Send,
    {
        if chunk_height == 0 || chunk_width == 0 {
            return Err(AsciiError::invalid(format!(
                "chunk dimensions must be positive, got {}x{}",
                chunk_height, chunk_width
            )));
        }

        let out_rows = self.rows.div_ceil(chunk_height);
        let out_cols = self.cols.div_ceil(chunk_width);

        let data = (0..out_rows * out_cols)
            .into_par_iter()
            .map(|idx| {
                let row0 = (idx / out_cols) * chunk_height;
                let col0 = (idx % out_cols) * chunk_width;
                let rows = chunk_height.min(self.rows - row0);
                let cols = chunk_width.min(self.cols - col0);
                reducer(self.block(row0, col0, rows, cols))
            })
            .collect();

        Ok(Grid {
            data,
            rows: out_rows,
            cols: out_cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "Grid index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

/// Borrowed rectangular region of a [`Grid`], handed to block reducers
#[derive(Debug)]
pub struct Block<'a, T> {
    grid: &'a Grid<T>,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
}

impl<T> Clone for Block<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Block<'_, T> {}

impl<'a, T> Block<'a, T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `(row, col)` relative to the block origin
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row < self.rows && col < self.cols {
            self.grid.get(self.row0 + row, self.col0 + col)
        } else {
            None
        }
    }

    /// One row of the block as a slice
    pub fn row(&self, row: usize) -> &'a [T] {
        assert!(row < self.rows, "Block row index out of bounds");
        &self.grid.row(self.row0 + row)[self.col0..self.col0 + self.cols]
    }

    /// Values in row-major order
    pub fn iter(self) -> impl Iterator<Item = &'a T> {
        (0..self.rows).flat_map(move |r| self.row(r).iter())
    }

    /// Arithmetic mean of `f` over every cell (0.0 for an empty block)
    pub fn mean_by(&self, f: impl Fn(&T) -> f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.iter().map(f).sum::<f64>() / self.len() as f64
    }
}

impl<T: Clone> Block<'_, T> {
    /// Copy the block out into an owned grid
    pub fn to_grid(&self) -> Grid<T> {
        Grid {
            data: self.iter().cloned().collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}
