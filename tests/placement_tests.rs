use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    BitBoardError, Board, ConfigError, Fleet, GameConfig, PlacementError, RandomPlacement,
    BOARD_SIZE,
};

#[test]
fn test_standard_config() {
    let config = GameConfig::default();
    assert_eq!(config.board_size, BOARD_SIZE);
    assert_eq!(config.fleet.lengths(), &[3, 2, 2, 1, 1, 1, 1]);
    assert_eq!(config.fleet.cells(), 11);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fleet_sorted_longest_first() {
    let fleet = Fleet::new(&[1, 3, 2]);
    assert_eq!(fleet.lengths(), &[3, 2, 1]);
}

#[test]
fn test_impossible_fleets_rejected_up_front() {
    assert_eq!(Fleet::new(&[]).validate(6), Err(ConfigError::EmptyFleet));
    assert_eq!(
        Fleet::new(&[2, 0]).validate(6),
        Err(ConfigError::ZeroLengthShip)
    );
    assert_eq!(
        Fleet::new(&[7]).validate(6),
        Err(ConfigError::ShipTooLong { length: 7, size: 6 })
    );
    assert_eq!(
        Fleet::new(&[3; 8]).validate(6),
        Err(ConfigError::FleetTooLarge {
            required: 64,
            capacity: 49
        })
    );
    assert_eq!(
        Fleet::standard().validate(12),
        Err(ConfigError::BitBoard(BitBoardError::SizeTooLarge {
            n: 12,
            capacity: 128
        }))
    );

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        RandomPlacement::default()
            .generate(4, false, &Fleet::standard(), &mut rng)
            .unwrap_err(),
        ConfigError::FleetTooLarge {
            required: 36,
            capacity: 25
        }
    );
}

#[test]
fn test_dead_end_is_bounded() {
    // passes the packing bound, but any two cells of a 2x2 board touch
    let fleet = Fleet::new(&[1, 1]);
    assert!(fleet.validate(2).is_ok());
    let placement = RandomPlacement {
        max_attempts: 50,
        max_restarts: 3,
    };
    let mut rng = SmallRng::seed_from_u64(7);

    let mut board = Board::new(2, false).unwrap();
    assert_eq!(
        placement.place_fleet(&mut board, &fleet, &mut rng),
        Err(PlacementError::Exhausted { attempts: 50 })
    );
    assert_eq!(
        placement.generate(2, false, &fleet, &mut rng).unwrap_err(),
        ConfigError::PlacementFailed { restarts: 3 }
    );
}

#[test]
fn test_proposals_stay_on_grid_or_degenerate() {
    let placement = RandomPlacement::default();
    let mut rng = SmallRng::seed_from_u64(99);
    let mut degenerate = 0;
    for _ in 0..500 {
        match placement.propose_ship(&mut rng, 6, 3) {
            Some(ship) => {
                assert_eq!(ship.length(), 3);
                assert!((0..6).contains(&ship.bow().row));
                assert!((0..6).contains(&ship.bow().col));
            }
            None => degenerate += 1,
        }
    }
    // half of the step vectors are zero or diagonal
    assert!(degenerate > 0 && degenerate < 500);
    assert!(placement.propose_ship(&mut rng, 0, 1).is_none());
}

#[test]
fn test_same_seed_same_fleet() {
    let fleet = Fleet::standard();
    let placement = RandomPlacement::default();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let b1 = placement.generate(6, false, &fleet, &mut rng1).unwrap();
    let b2 = placement.generate(6, true, &fleet, &mut rng2).unwrap();
    assert_eq!(b1.ships(), b2.ships());
    assert!(b2.is_hidden());
}
