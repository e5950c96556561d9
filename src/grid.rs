//! Cell-value grid: the in-memory and wire representation of one player's
//! waters.
//!
//! Each cell is a single `u8` drawn from a fixed domain: `0` untouched water,
//! `9` a miss, a bare ship size (`2`..`4`) an unhit segment, and `10 + size`
//! a hit segment. Encoding damage as an offset keeps the ship's identity
//! recoverable from any hit cell, which sinking detection relies on.

use crate::config::{ship_by_size, GRID_SIZE};
use core::fmt;

/// Untouched water.
pub const WATER: u8 = 0;
/// Water that has been fired upon.
pub const MISS: u8 = 9;
/// Added to a ship's size when one of its segments is hit.
pub const HIT_OFFSET: u8 = 10;

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index outside [0..GRID_SIZE).
    OutOfBounds { row: usize, col: usize },
    /// Cell holds a value outside the encoding domain (corrupt input).
    InvalidCell { row: usize, col: usize, value: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", row, col, GRID_SIZE, GRID_SIZE)
            }
            GridError::InvalidCell { row, col, value } => {
                write!(f, "cell ({}, {}) holds invalid value {}", row, col, value)
            }
        }
    }
}

/// Classified view of one raw cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Water,
    Miss,
    /// Unhit segment of the ship with this size.
    Ship(u8),
    /// Hit segment of the ship with this size.
    Hit(u8),
}

impl CellKind {
    /// Classify a raw cell value, or `None` if it is outside the domain.
    pub fn from_value(value: u8) -> Option<CellKind> {
        match value {
            WATER => Some(CellKind::Water),
            MISS => Some(CellKind::Miss),
            v if ship_by_size(v).is_some() => Some(CellKind::Ship(v)),
            v if v > HIT_OFFSET && ship_by_size(v - HIT_OFFSET).is_some() => {
                Some(CellKind::Hit(v - HIT_OFFSET))
            }
            _ => None,
        }
    }
}

/// A 6x6 matrix of cell values. Serializes as a bare array of arrays of
/// integers; that shape is the storage contract with other collaborators.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create an all-water grid.
    pub fn new() -> Self {
        Grid {
            cells: [[WATER; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Wrap a raw cell matrix, e.g. one decoded from storage.
    pub fn from_cells(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Grid { cells }
    }

    /// Raw cell matrix.
    pub fn cells(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Value of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    /// Classified view of the cell at (row, col).
    pub fn kind_at(&self, row: usize, col: usize) -> Result<CellKind, GridError> {
        let value = self.get(row, col)?;
        CellKind::from_value(value).ok_or(GridError::InvalidCell { row, col, value })
    }

    /// Number of cells holding exactly `value`.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == value).count()
    }

    /// Iterate over every cell as (row, col, value).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            Err(GridError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid [")?;
        for row in &self.cells {
            writeln!(f, "  {:?}", row)?;
        }
        write!(f, "]")
    }
}
