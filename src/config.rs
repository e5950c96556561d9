use crate::ship::ShipType;

pub const GRID_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 3;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Big Dinghy", 4),
    ShipType::new("Dinghy", 3),
    ShipType::new("Small Dinghy", 2),
];
pub const TOTAL_SHIP_CELLS: usize = 9;

/// Look up the fleet entry whose size matches a bare or recovered cell value.
pub fn ship_by_size(size: u8) -> Option<ShipType> {
    SHIPS.iter().copied().find(|s| s.size() == size)
}
