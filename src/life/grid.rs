//! Cell and grid representation for the automaton

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Grid access errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) out of bounds for {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
}

/// One grid position.
///
/// For a live cell `age` counts the consecutive generations it has been
/// alive, 0 on the generation it was born. For a dead cell `age` is a
/// non-positive staleness counter: 0 means never alive, -k means it died k
/// generations ago. Negative ages drive the fade-trace rendering and are
/// clamped by the step engine at the trace palette floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub alive: bool,
    pub age: i32,
}

impl Cell {
    /// A cell that has never been alive
    pub const BLANK: Cell = Cell {
        alive: false,
        age: 0,
    };

    /// Index into the trace palette for a recently-dead cell, if any
    pub fn trace_index(&self) -> Option<usize> {
        if !self.alive && self.age < 0 {
            Some((-self.age) as usize)
        } else {
            None
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

/// A fixed-size rectangular field of cells, row-major with the origin at
/// the top-left. Coordinates are `(x, y)` with `0 <= x < cols` and
/// `0 <= y < rows`; dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Read the cell at `(x, y)`.
    ///
    /// Out-of-range coordinates are rejected rather than wrapped or clamped;
    /// silent wraparound would corrupt population accounting.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Mark the cell at `(x, y)` alive with age 0
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = Cell {
            alive: true,
            age: 0,
        };
        Ok(())
    }

    /// Mark the cell at `(x, y)` dead with age -1 (freshly dead, so the
    /// first trace color applies)
    pub fn unset(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = Cell {
            alive: false,
            age: -1,
        };
        Ok(())
    }

    /// Write a full cell value; used by the step engine when building the
    /// next generation
    pub(crate) fn put(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Unchecked-by-contract read for internal full-grid sweeps
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Reset every cell to never-alive (age 0, distinct from "just died")
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Count live cells among the 8 Moore neighbors of `(x, y)`.
    ///
    /// Off-grid positions are permanently dead: border cells simply have
    /// fewer effective neighbors (hard-edge, not toroidal).
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx >= 0
                    && ny >= 0
                    && (nx as usize) < self.cols
                    && (ny as usize) < self.rows
                    && self.cells[self.index(nx as usize, ny as usize)].alive
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Exact count of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Coordinates of every live cell, row by row
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                if self.cells[self.index(x, y)].alive {
                    live.push((x, y));
                }
            }
        }
        live
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.alive)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let cell = self.cells[self.index(x, y)];
                write!(f, "{}", if cell.alive { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert!(grid.is_empty());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_set_unset_get() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 2).unwrap();
        assert_eq!(
            grid.get(1, 2).unwrap(),
            Cell {
                alive: true,
                age: 0
            }
        );
        assert_eq!(grid.population(), 1);

        grid.unset(1, 2).unwrap();
        assert_eq!(
            grid.get(1, 2).unwrap(),
            Cell {
                alive: false,
                age: -1
            }
        );
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_out_of_bounds_rejected_uniformly() {
        let mut grid = Grid::new(3, 5);
        let err = GridError::OutOfBounds {
            x: 5,
            y: 0,
            cols: 5,
            rows: 3,
        };
        assert_eq!(grid.get(5, 0), Err(err.clone()));
        assert_eq!(grid.set(5, 0), Err(err.clone()));
        assert_eq!(grid.unset(5, 0), Err(err));
        assert!(grid.get(0, 3).is_err());
    }

    #[test]
    fn test_neighbor_counting_center() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y).unwrap();
            }
        }
        grid.unset(1, 1).unwrap();
        assert_eq!(grid.neighbor_count(1, 1), 8);
    }

    #[test]
    fn test_corner_never_counts_off_grid() {
        let mut grid = Grid::new(3, 3);
        // Fill everything; the corner has only 3 in-grid neighbors
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y).unwrap();
            }
        }
        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(2, 2), 3);
        assert_eq!(grid.neighbor_count(0, 2), 3);
    }

    #[test]
    fn test_clear_resets_to_never_alive() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0).unwrap();
        grid.unset(0, 0).unwrap(); // age -1
        grid.set(1, 1).unwrap();
        grid.clear();
        assert!(grid.is_empty());
        // Cleared cells read as never-alive, not freshly dead
        assert_eq!(grid.get(0, 0).unwrap().age, 0);
        assert_eq!(grid.get(1, 1).unwrap().age, 0);
    }

    #[test]
    fn test_trace_index() {
        assert_eq!(Cell::BLANK.trace_index(), None);
        let dying = Cell {
            alive: false,
            age: -2,
        };
        assert_eq!(dying.trace_index(), Some(2));
        let living = Cell {
            alive: true,
            age: 4,
        };
        assert_eq!(living.trace_index(), None);
    }

    #[test]
    fn test_live_cells() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0).unwrap();
        grid.set(0, 1).unwrap();
        assert_eq!(grid.live_cells(), vec![(2, 0), (0, 1)]);
    }
}
