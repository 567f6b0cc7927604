//! The solved minesweeper grid: every cell knows whether it holds a mine and
//! how many of its up-to-8 neighbors do.

use alloc::vec::Vec;
use core::ops::Index;
use log::debug;

use crate::common::GridError;
use crate::config::MAX_NEIGHBORS;
use crate::specification::Specification;

/// One grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    has_mine: bool,
    nearby_mines: u8,
}

impl Cell {
    /// Does this cell contain a mine?
    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    /// Number of mines among the adjacent cells, `0..=8`.
    ///
    /// Counted for mined cells as well; the cell itself is never included.
    pub fn nearby_mines(&self) -> u8 {
        self.nearby_mines
    }
}

/// Immutable `height × width` grid of [`Cell`]s, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

/// Mutable staging area used while a [`Grid`] is being assembled.
struct GridBuilder {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl GridBuilder {
    fn new(height: usize, width: usize) -> Self {
        GridBuilder {
            height,
            width,
            cells: alloc::vec![Cell::default(); height * width],
        }
    }

    fn place_mine(&mut self, row: usize, column: usize) {
        self.cells[row * self.width + column].has_mine = true;
        for (r, c) in neighbors(self.height, self.width, row, column) {
            let cell = &mut self.cells[r * self.width + c];
            debug_assert!(cell.nearby_mines < MAX_NEIGHBORS);
            cell.nearby_mines += 1;
        }
    }

    fn finish(self) -> Grid {
        Grid {
            height: self.height,
            width: self.width,
            cells: self.cells,
        }
    }
}

impl Grid {
    /// Build the grid for `spec`, counting each cell's neighboring mines.
    ///
    /// Fails with [`GridError::Degenerate`] when the specification has no rows
    /// or no columns.
    pub fn build(spec: &Specification) -> Result<Self, GridError> {
        let (height, width) = (spec.height(), spec.width());
        if height == 0 || width == 0 {
            return Err(GridError::Degenerate { height, width });
        }

        let mut builder = GridBuilder::new(height, width);
        for (row, column) in spec.mines() {
            builder.place_mine(row, column);
        }
        let grid = builder.finish();
        debug!(
            "built {}x{} grid with {} mines",
            height,
            width,
            grid.mine_count()
        );
        Ok(grid)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell at (`row`, `column`).
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, GridError> {
        if row >= self.height || column >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                column,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.cells[row * self.width + column])
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_mine).count()
    }

    /// In-bounds coordinates adjacent to (`row`, `column`), excluding itself.
    pub fn neighbors(
        &self,
        row: usize,
        column: usize,
    ) -> Result<impl Iterator<Item = (usize, usize)>, GridError> {
        self.cell(row, column)?;
        Ok(neighbors(self.height, self.width, row, column))
    }
}

/// Panics when the coordinates are out of bounds; use [`Grid::cell`] for a
/// fallible lookup.
impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, column): (usize, usize)) -> &Cell {
        if let Err(err) = self.cell(row, column) {
            panic!("{}", err);
        }
        &self.cells[row * self.width + column]
    }
}

// 3x3 block around (row, column) minus the center, clipped to the grid. No wraparound.
fn neighbors(
    height: usize,
    width: usize,
    row: usize,
    column: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let rows = row.saturating_sub(1)..(row + 2).min(height);
    rows.flat_map(move |r| {
        (column.saturating_sub(1)..(column + 2).min(width)).map(move |c| (r, c))
    })
    .filter(move |&(r, c)| (r, c) != (row, column))
}
