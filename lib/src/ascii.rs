use crate::error::{AsciiError, Result};
use crate::grid::Grid;
use std::fmt::Display;
use std::io::Write;

/// Render a glyph grid as text
///
/// Each glyph is repeated `magnification` times horizontally to make up for
/// character cells being taller than they are wide. Every row, including the
/// last, ends in a single `\n`. Nothing is repeated vertically.
///
/// # Errors
/// Returns `InvalidArgument` if `magnification` is zero.
pub fn render<T: Display>(grid: &Grid<T>, magnification: usize) -> Result<String> {
    check_magnification(magnification)?;

    let mut out = String::with_capacity(grid.rows() * (grid.cols() * magnification + 1));
    for row in grid.iter_rows() {
        out.push_str(&render_row(row, magnification));
    }
    Ok(out)
}

/// Stream the same text as [`render`] into `writer`, one row at a time
///
/// # Errors
/// Returns `InvalidArgument` if `magnification` is zero, or `Io` if a write
/// fails. Nothing is written when the magnification is rejected.
pub fn write_text<T: Display, W: Write>(
    grid: &Grid<T>,
    magnification: usize,
    mut writer: W,
) -> Result<()> {
    check_magnification(magnification)?;

    for row in grid.iter_rows() {
        writer.write_all(render_row(row, magnification).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn render_row<T: Display>(row: &[T], magnification: usize) -> String {
    let mut line: String = row
        .iter()
        .map(|glyph| glyph.to_string().repeat(magnification))
        .collect();
    line.push('\n');
    line
}

fn check_magnification(magnification: usize) -> Result<()> {
    if magnification < 1 {
        return Err(AsciiError::invalid(format!(
            "horizontal magnification must be at least 1, got {}",
            magnification
        )));
    }
    Ok(())
}
