//! Fixed-size row-major cell storage with wall borders.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::mapgen;
use crate::types::{EngineError, Pos};

/// Loaded grids are checked for a sane shape before use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct GridData {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = EngineError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let GridData { height, width, cells } = data;
        mapgen::check_dimensions(height, width)?;
        if height.checked_mul(width) != Some(cells.len()) {
            return Err(EngineError::GridShapeMismatch { height, width, cells: cells.len() });
        }
        Ok(Self { height, width, cells })
    }
}

impl Grid {
    /// Walled grid with an empty interior, rejecting dimensions below the minimum.
    pub fn try_new(height: usize, width: usize) -> Result<Self, EngineError> {
        mapgen::check_dimensions(height, width)?;
        Ok(Self::new(height, width))
    }

    /// Empty interior surrounded by walls. Dimensions must already be checked.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        let mut cells = vec![Cell::Empty; width * height];
        for col in 0..width {
            cells[col] = Cell::Wall;
            cells[(height - 1) * width + col] = Cell::Wall;
        }
        for row in 0..height {
            cells[row * width] = Cell::Wall;
            cells[row * width + (width - 1)] = Cell::Wall;
        }
        Self { height, width, cells }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.row == 0
                || pos.col == 0
                || pos.row as usize == self.height - 1
                || pos.col as usize == self.width - 1)
    }

    pub fn cell_at(&self, pos: Pos) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.index(pos)])
    }

    /// Stores `cell` at `pos` and returns the previous occupant.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        Some(mem::replace(&mut self.cells[idx], cell))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| Pos { row: row as i32, col: col as i32 })
        })
    }

    pub fn interior_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|pos| !self.is_border(*pos))
    }

    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(**cell)).count()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.width + (pos.col as usize)
    }
}
