// grid.rs - Grid type for Conway's Game of Life
//
// Cells are stored row-major in one flat vector, so rows never share storage.
// Coordinates are (x, y) with x in 0..cols and y in 0..rows.

use log::debug;

use crate::error::{GridError, GridResult};

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.cols as u64 && (y as u64) < self.rows as u64
    }

    /// Returns the index of (x, y) in the cell vector.
    pub fn index_of(&self, x: i64, y: i64) -> GridResult<usize> {
        if self.contains(x, y) {
            Ok(y as usize * self.cols + x as usize)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Returns whether the cell is alive. Cells outside the grid read as dead.
    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows && self.cells[y * self.cols + x]
    }

    /// Sets a single cell, ignoring coordinates outside the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        if let Err(err) = self.try_set_cell(x as i64, y as i64, alive) {
            debug!("ignoring edit: {err}");
        }
    }

    pub fn try_set_cell(&mut self, x: i64, y: i64, alive: bool) -> GridResult<()> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx % cols, idx / cols))
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {}x{}", self.cols, self.rows)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
