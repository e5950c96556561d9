//! Board engine: fleet placement, shot resolution, and status queries for a
//! single player's waters.

use crate::common::{PlacementError, ShotOutcome};
use crate::config::{NUM_SHIPS, SHIPS};
use crate::coord::Coordinate;
use crate::grid::{CellKind, Grid, GridError, HIT_OFFSET, MISS, WATER};
use crate::ship::{Orientation, Placement};
use rand::Rng;

const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Remaining unhit segments per ship size, in `SHIPS` order.
///
/// A ship is afloat while any of its segments is unhit; a board whose every
/// ship has zero remaining segments is beaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetStatus {
    remaining: [usize; NUM_SHIPS],
}

impl FleetStatus {
    /// Unhit segments left for the ship of the given size.
    pub fn remaining(&self, size: u8) -> usize {
        SHIPS
            .iter()
            .position(|s| s.size() == size)
            .map_or(0, |i| self.remaining[i])
    }

    /// True while the ship of the given size has an unhit segment.
    pub fn afloat(&self, size: u8) -> bool {
        self.remaining(size) > 0
    }

    /// Number of ships still afloat.
    pub fn ships_afloat(&self) -> usize {
        self.remaining.iter().filter(|&&n| n > 0).count()
    }

    /// True once no ship has an unhit segment left.
    pub fn all_sunk(&self) -> bool {
        self.ships_afloat() == 0
    }

    /// Iterate over (ship, remaining segments) in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = (crate::ship::ShipType, usize)> + '_ {
        SHIPS.iter().copied().zip(self.remaining.iter().copied())
    }
}

/// Shot tally for one board; display and statistics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotCounts {
    pub hits: usize,
    pub misses: usize,
}

impl ShotCounts {
    /// Total shots absorbed by the board.
    pub fn total(&self) -> usize {
        self.hits + self.misses
    }

    /// Hit percentage, rounded to the nearest whole percent.
    pub fn accuracy_pct(&self) -> usize {
        let total = self.total();
        if total == 0 {
            0
        } else {
            (self.hits * 100 + total / 2) / total
        }
    }
}

/// One player's waters: the placed fleet and every shot it has absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Validate a candidate fleet layout and build the board.
    ///
    /// The layout must hold exactly one ship of each configured size, every
    /// segment must stay in bounds (enforced by [`Placement::new`]), and no
    /// two ships may share a cell.
    pub fn place_fleet(placements: &[Placement]) -> Result<Board, PlacementError> {
        for def in SHIPS {
            let count = placements
                .iter()
                .filter(|p| p.kind().size() == def.size())
                .count();
            if count != 1 {
                return Err(PlacementError::WrongFleetComposition {
                    size: def.size(),
                    count,
                });
            }
        }
        let mut grid = Grid::new();
        for placement in placements {
            for (row, col) in placement.cells() {
                if grid.get(row, col)? != WATER {
                    return Err(PlacementError::ShipOverlaps { row, col });
                }
                grid.set(row, col, placement.kind().size())?;
            }
        }
        Ok(Board { grid })
    }

    /// Place the whole fleet at random, retrying until a legal layout lands.
    pub fn random<R: Rng>(rng: &mut R) -> Board {
        loop {
            if let Some(board) = Self::try_random(rng) {
                return board;
            }
            // placement attempts exhausted; restart with a clean grid
        }
    }

    fn try_random<R: Rng>(rng: &mut R) -> Option<Board> {
        let mut grid = Grid::new();
        'ships: for def in SHIPS {
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_row, max_col) = match orientation {
                    Orientation::Horizontal => {
                        (crate::config::GRID_SIZE - 1, crate::config::GRID_SIZE - def.segments())
                    }
                    Orientation::Vertical => {
                        (crate::config::GRID_SIZE - def.segments(), crate::config::GRID_SIZE - 1)
                    }
                };
                let row = rng.random_range(0..=max_row);
                let col = rng.random_range(0..=max_col);
                let Ok(placement) = Placement::new(def, orientation, row, col) else {
                    continue;
                };
                let clear = placement
                    .cells()
                    .all(|(r, c)| matches!(grid.get(r, c), Ok(WATER)));
                if clear {
                    for (r, c) in placement.cells() {
                        let _ = grid.set(r, c, def.size());
                    }
                    continue 'ships;
                }
            }
            return None;
        }
        Some(Board { grid })
    }

    /// Pick a uniformly random cell that has not been fired upon yet.
    ///
    /// This is the shooter used by the demo and simulation binaries; `None`
    /// once the whole board has been fired at.
    pub fn random_untried<R: Rng>(&self, rng: &mut R) -> Option<Coordinate> {
        fn untried(value: u8) -> bool {
            matches!(
                CellKind::from_value(value),
                Some(CellKind::Water | CellKind::Ship(_))
            )
        }
        let count = self.grid.iter().filter(|&(_, _, v)| untried(v)).count();
        if count == 0 {
            return None;
        }
        let pick = rng.random_range(0..count);
        self.grid
            .iter()
            .filter(|&(_, _, v)| untried(v))
            .nth(pick)
            .and_then(|(row, col, _)| Coordinate::new(row, col))
    }

    /// Resolve a shot at `target`, mutating the board in place.
    ///
    /// Water becomes a miss, an unhit segment becomes a hit (upgraded to
    /// `Sunk` when it was the ship's last one), and a cell that was already
    /// fired upon is reported as `AlreadyFired` without any mutation.
    /// `GridError` here signals a caller bug or a corrupt grid, not a
    /// player-facing condition.
    pub fn apply_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, GridError> {
        let (row, col) = (target.row(), target.col());
        match self.grid.kind_at(row, col)? {
            CellKind::Miss | CellKind::Hit(_) => Ok(ShotOutcome::AlreadyFired),
            CellKind::Water => {
                self.grid.set(row, col, MISS)?;
                Ok(ShotOutcome::Miss)
            }
            CellKind::Ship(size) => {
                self.grid.set(row, col, HIT_OFFSET + size)?;
                // ship identity survives the hit, so one scan per size suffices
                if self.grid.count(size) == 0 {
                    Ok(ShotOutcome::Sunk(size))
                } else {
                    Ok(ShotOutcome::Hit(size))
                }
            }
        }
    }

    /// Remaining unhit segments per ship size.
    pub fn fleet_status(&self) -> FleetStatus {
        let mut remaining = [0usize; NUM_SHIPS];
        for (i, def) in SHIPS.iter().enumerate() {
            remaining[i] = self.grid.count(def.size());
        }
        FleetStatus { remaining }
    }

    /// Hits and misses absorbed so far.
    pub fn shot_counts(&self) -> ShotCounts {
        let mut counts = ShotCounts { hits: 0, misses: 0 };
        for (_, _, value) in self.grid.iter() {
            if value >= HIT_OFFSET {
                counts.hits += 1;
            } else if value == MISS {
                counts.misses += 1;
            }
        }
        counts
    }

    /// True once every ship on the board is fully hit.
    pub fn all_sunk(&self) -> bool {
        self.fleet_status().all_sunk()
    }

    /// The underlying cell grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the board, yielding its grid for persistence.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Board { grid }
    }
}
