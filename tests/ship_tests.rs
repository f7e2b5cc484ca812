use sea_battle::{Coordinate, Orientation, Ship};

#[test]
fn test_cells_follow_orientation() {
    let ship = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );

    let ship = Ship::new(Coordinate::new(0, 4), 2, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 4), Coordinate::new(1, 4)]);
    assert!(ship.contains(Coordinate::new(1, 4)));
    assert!(!ship.contains(Coordinate::new(2, 4)));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(Coordinate::new(1, 1), 2, Orientation::Horizontal);
    assert_eq!(ship.lives(), 2);
    assert!(!ship.register_hit(Coordinate::new(1, 1)));
    assert_eq!(ship.lives(), 1);
    // not part of the ship
    assert!(!ship.register_hit(Coordinate::new(0, 0)));
    assert_eq!(ship.lives(), 1);
    assert!(ship.register_hit(Coordinate::new(1, 2)));
    assert!(ship.is_sunk());
}

#[test]
fn test_lives_never_negative() {
    let mut ship = Ship::new(Coordinate::new(0, 0), 1, Orientation::Vertical);
    assert!(ship.register_hit(Coordinate::new(0, 0)));
    for _ in 0..4 {
        assert!(ship.register_hit(Coordinate::new(0, 0)));
        assert_eq!(ship.lives(), 0);
    }
}

#[test]
fn test_orientation_from_step() {
    assert_eq!(Orientation::from_step(0, 1), Some(Orientation::Horizontal));
    assert_eq!(Orientation::from_step(1, 0), Some(Orientation::Vertical));
    assert_eq!(Orientation::from_step(0, 0), None);
    assert_eq!(Orientation::from_step(1, 1), None);
    assert_eq!(Orientation::Horizontal.step(), (0, 1));
}
