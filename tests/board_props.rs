use battle_dinghy::{Board, Coordinate, ShotOutcome, GRID_SIZE, SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::random(&mut rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every random fleet covers exactly 4+3+2 cells, one run per ship size.
    #[test]
    fn random_fleet_has_exact_ship_cells(seed in any::<u64>()) {
        let board = random_board(seed);
        let ship_cells: usize = board.grid().iter().filter(|&(_, _, v)| v != 0).count();
        prop_assert_eq!(ship_cells, TOTAL_SHIP_CELLS);
        for def in SHIPS {
            prop_assert_eq!(board.grid().count(def.size()), def.segments());
        }
    }

    /// A second shot at the same cell reports AlreadyFired and changes nothing.
    #[test]
    fn refire_is_idempotent(
        seed in any::<u64>(),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
    ) {
        let mut board = random_board(seed);
        let target = Coordinate::new(row, col).unwrap();

        let first = board.apply_shot(target).unwrap();
        prop_assert_ne!(first, ShotOutcome::AlreadyFired);
        let after_first = *board.grid();

        let second = board.apply_shot(target).unwrap();
        prop_assert_eq!(second, ShotOutcome::AlreadyFired);
        prop_assert_eq!(*board.grid(), after_first);
    }

    /// Hitting every segment of a ship reports Sunk on the final segment and
    /// only there, regardless of order.
    #[test]
    fn sinking_fires_only_on_last_segment(seed in any::<u64>(), rotate in 0..4usize) {
        let mut board = random_board(seed);
        let big = SHIPS[0].size();
        let mut cells: Vec<Coordinate> = board
            .grid()
            .iter()
            .filter(|&(_, _, v)| v == big)
            .filter_map(|(r, c, _)| Coordinate::new(r, c))
            .collect();
        prop_assert_eq!(cells.len(), SHIPS[0].segments());
        let n = cells.len();
        cells.rotate_left(rotate % n);

        let (last, rest) = cells.split_last().unwrap();
        for &target in rest {
            prop_assert_eq!(board.apply_shot(target).unwrap(), ShotOutcome::Hit(big));
        }
        prop_assert_eq!(board.apply_shot(*last).unwrap(), ShotOutcome::Sunk(big));
    }

    /// Firing at every cell beats the whole fleet and tallies hits exactly.
    #[test]
    fn full_board_sweep_sinks_everything(seed in any::<u64>()) {
        let mut board = random_board(seed);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                board.apply_shot(Coordinate::new(row, col).unwrap()).unwrap();
            }
        }
        prop_assert!(board.all_sunk());
        for def in SHIPS {
            prop_assert_eq!(board.fleet_status().remaining(def.size()), 0);
        }
        let counts = board.shot_counts();
        prop_assert_eq!(counts.hits, TOTAL_SHIP_CELLS);
        prop_assert_eq!(counts.misses, GRID_SIZE * GRID_SIZE - TOTAL_SHIP_CELLS);
    }
}
