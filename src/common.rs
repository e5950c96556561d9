//! Shared result and error types for the board engine.

use crate::config::ship_by_size;
use crate::grid::GridError;
use crate::ship::ShipType;
use core::fmt;

/// Classification of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck an unhit segment of the ship with this size.
    Hit(u8),
    /// Shot struck the last unhit segment of the ship with this size.
    Sunk(u8),
    /// Cell was already a miss or a hit; nothing changed.
    AlreadyFired,
}

impl ShotOutcome {
    /// The struck ship, when the shot connected.
    pub fn ship(&self) -> Option<ShipType> {
        match self {
            ShotOutcome::Hit(size) | ShotOutcome::Sunk(size) => ship_by_size(*size),
            _ => None,
        }
    }

    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_) | ShotOutcome::Sunk(_))
    }
}

/// Errors returned when a candidate fleet layout is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Underlying grid error (defensive).
    Grid(GridError),
    /// A segment of the named ship would fall outside the grid.
    ShipOutOfBounds {
        ship: &'static str,
        row: usize,
        col: usize,
    },
    /// Two ships in the candidate set claim the same cell.
    ShipOverlaps { row: usize, col: usize },
    /// The candidate set does not contain exactly one ship of each size.
    WrongFleetComposition { size: u8, count: usize },
}

impl From<GridError> for PlacementError {
    fn from(err: GridError) -> Self {
        PlacementError::Grid(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Grid(e) => write!(f, "grid error: {}", e),
            PlacementError::ShipOutOfBounds { ship, row, col } => {
                write!(f, "{} at ({}, {}) does not fit on the grid", ship, row, col)
            }
            PlacementError::ShipOverlaps { row, col } => {
                write!(f, "ship placement overlaps another ship at ({}, {})", row, col)
            }
            PlacementError::WrongFleetComposition { size, count } => {
                write!(f, "fleet needs exactly one size-{} ship, got {}", size, count)
            }
        }
    }
}
