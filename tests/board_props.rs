use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{Board, Coordinate, Fleet, RandomPlacement, ShotError, ShotOutcome};

fn random_board(seed: u64, size: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    RandomPlacement::default()
        .generate(size, false, &Fleet::standard(), &mut rng)
        .unwrap()
}

fn chebyshev(a: Coordinate, b: Coordinate) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_in_bounds_and_apart(seed in any::<u64>(), size in 6usize..=11) {
        let board = random_board(seed, size);
        let fleet = Fleet::standard();
        prop_assert_eq!(board.ship_count(), fleet.ship_count());
        let n = size as i32;
        for ship in board.ships() {
            prop_assert_eq!(ship.cells().count(), ship.length());
            for cell in ship.cells() {
                prop_assert!(cell.row >= 0 && cell.row < n && cell.col >= 0 && cell.col < n);
            }
        }
        for (i, a) in board.ships().iter().enumerate() {
            for b in &board.ships()[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(chebyshev(ca, cb) >= 2, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn second_shot_is_refused(seed in any::<u64>(), row in 0i32..6, col in 0i32..6) {
        let mut board = random_board(seed, 6);
        let at = Coordinate::new(row, col);
        let before = board.unresolved().count();
        board.shoot(at).unwrap();
        prop_assert!(board.unresolved().count() < before);
        let after = board.unresolved().count();
        prop_assert_eq!(board.shoot(at), Err(ShotError::AlreadyShot));
        prop_assert_eq!(board.unresolved().count(), after);
    }

    #[test]
    fn ships_sink_after_exactly_their_length(seed in any::<u64>()) {
        let mut board = random_board(seed, 6);
        let ships: Vec<_> = board.ships().to_vec();
        let mut remaining = board.remaining_ship_count();
        for ship in ships {
            let cells: Vec<_> = ship.cells().collect();
            for (i, cell) in cells.iter().enumerate() {
                let outcome = board.shoot(*cell).unwrap();
                if i + 1 == cells.len() {
                    prop_assert_eq!(outcome, ShotOutcome::Sunk);
                    remaining -= 1;
                } else {
                    prop_assert_eq!(outcome, ShotOutcome::Hit);
                }
                prop_assert_eq!(board.remaining_ship_count(), remaining);
            }
        }
        prop_assert!(board.all_sunk());
    }

    #[test]
    fn random_fire_resolves_each_cell_once(seed in any::<u64>()) {
        let mut board = random_board(seed, 6);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        while !board.all_sunk() {
            let at = Coordinate::new(rng.random_range(0..6), rng.random_range(0..6));
            let open = !board.is_resolved(at);
            match board.shoot(at) {
                Ok(_) => prop_assert!(open),
                Err(e) => {
                    prop_assert!(!open);
                    prop_assert_eq!(e, ShotError::AlreadyShot);
                }
            }
        }
        prop_assert_eq!(board.remaining_ship_count(), 0);
    }
}
