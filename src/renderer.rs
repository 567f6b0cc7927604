//! Bordered text rendering of a [`Grid`].

use alloc::string::String;
use core::fmt::{self, Write};

use crate::config::{CORNER, MINE_GLYPH, SEGMENT, WALL};
use crate::grid::Grid;

/// Render `grid` as a bordered table, e.g. for a single mined cell:
///
/// ```text
/// +---+
/// | * |
/// +---+
/// ```
///
/// Every line, including the last, ends with `\n`.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.height() * 2 + 1) * (grid.width() * 4 + 2));
    // Writing into a String cannot fail.
    let _ = write_grid(&mut out, grid);
    out
}

/// Serialize `grid` as JSON: dimensions plus a row-major `cells` array.
#[cfg(feature = "std")]
pub fn render_json(grid: &Grid) -> serde_json::Result<String> {
    serde_json::to_string(grid)
}

fn write_separator<W: Write>(out: &mut W, width: usize) -> fmt::Result {
    out.write_str(CORNER)?;
    for _ in 0..width {
        out.write_str(SEGMENT)?;
    }
    out.write_char('\n')
}

fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> fmt::Result {
    for row in grid.rows() {
        write_separator(out, grid.width())?;
        out.write_str(WALL)?;
        for cell in row {
            if cell.has_mine() {
                write!(out, " {} ", MINE_GLYPH)?;
            } else {
                write!(out, " {} ", cell.nearby_mines())?;
            }
            out.write_str(WALL)?;
        }
        out.write_char('\n')?;
    }
    write_separator(out, grid.width())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self)
    }
}
