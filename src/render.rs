#![cfg(feature = "std")]
//! Text rendering of boards for the posting collaborator.

use crate::board::FleetStatus;
use crate::config::GRID_SIZE;
use crate::grid::{CellKind, Grid};

const COLUMN_HEADERS: &str = "1️⃣2️⃣3️⃣4️⃣5️⃣6️⃣";
const WATER_EMOJI: &str = "🟦";
const MISS_EMOJI: &str = "⭕";
const HIT_EMOJI: &str = "💥";
const SHIP_EMOJI: &str = "🚤";
const UNKNOWN_EMOJI: &str = "❓";

/// Render a grid as a fenced emoji board.
///
/// With `reveal_ships` false, unhit ships render as open water; that is the
/// view a player gets of the waters they are firing into.
pub fn render_grid(grid: &Grid, title: &str, reveal_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("```\n");
    out.push_str(title);
    out.push('\n');
    out.push_str("  ");
    out.push_str(COLUMN_HEADERS);
    out.push('\n');
    for (r, row) in grid.cells().iter().enumerate() {
        out.push((b'A' + r as u8) as char);
        out.push(' ');
        for &value in row {
            let emoji = match CellKind::from_value(value) {
                Some(CellKind::Water) => WATER_EMOJI,
                Some(CellKind::Miss) => MISS_EMOJI,
                Some(CellKind::Hit(_)) => HIT_EMOJI,
                Some(CellKind::Ship(_)) => {
                    if reveal_ships {
                        SHIP_EMOJI
                    } else {
                        WATER_EMOJI
                    }
                }
                None => UNKNOWN_EMOJI,
            };
            out.push_str(emoji);
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str("Legend: 🟦 = water   ⭕ = miss   💥 = hit/sunk   🚤 = dinghy\n");
    out.push_str("```");
    out
}

/// One line per ship: afloat with remaining segments, or sunk.
pub fn render_fleet_status(fleet: &FleetStatus) -> String {
    let mut out = String::new();
    for (ship, remaining) in fleet.ships() {
        if remaining > 0 {
            out.push_str(&format!(
                "🚤 {}: afloat ({}/{} segments)\n",
                ship.name(),
                remaining,
                ship.segments()
            ));
        } else {
            out.push_str(&format!("💥 {}: sunk\n", ship.name()));
        }
    }
    out.push_str(&format!(
        "🚢 Ships left: {}/{}",
        fleet.ships_afloat(),
        crate::config::NUM_SHIPS
    ));
    out
}

/// Row label for a zero-based row index, for prompts and captions.
pub fn row_label(row: usize) -> Option<char> {
    if row < GRID_SIZE {
        Some((b'A' + row as u8) as char)
    } else {
        None
    }
}
