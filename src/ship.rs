//! Ship definitions and validated placements.

use crate::common::PlacementError;
use crate::config::GRID_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and size. The size doubles as the ship's cell value,
/// so it also identifies the ship on a serialized grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    size: u8,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, size: u8) -> Self {
        Self { name, size }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's size, which is also its cell value on the grid.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of cells the ship occupies.
    pub fn segments(&self) -> usize {
        self.size as usize
    }
}

/// A candidate position for one ship: origin cell plus orientation.
///
/// Construction checks that every segment stays inside the grid, so a
/// `Placement` always describes in-bounds cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    kind: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl Placement {
    /// Place `kind` at (`row`, `col`) with `orientation`.
    pub fn new(
        kind: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, PlacementError> {
        let len = kind.segments();
        let fits = match orientation {
            Orientation::Horizontal => row < GRID_SIZE && col + len <= GRID_SIZE,
            Orientation::Vertical => col < GRID_SIZE && row + len <= GRID_SIZE,
        };
        if !fits {
            return Err(PlacementError::ShipOutOfBounds {
                ship: kind.name(),
                row,
                col,
            });
        }
        Ok(Placement {
            kind,
            orientation,
            row,
            col,
        })
    }

    /// Ship type being placed.
    pub fn kind(&self) -> ShipType {
        self.kind
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterate over the (row, col) of every segment.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.kind.segments()).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }
}
