use warships::{Coordinate, Orientation, Ship};

#[test]
fn test_dots_follow_orientation() {
    let horizontal = Ship::new(3, Coordinate::new(1, 1), Orientation::Horizontal);
    let dots: Vec<_> = horizontal.dots().collect();
    assert_eq!(
        dots,
        vec![Coordinate::new(1, 1), Coordinate::new(2, 1), Coordinate::new(3, 1)]
    );

    let vertical = Ship::new(2, Coordinate::new(4, 2), Orientation::Vertical);
    let dots: Vec<_> = vertical.dots().collect();
    assert_eq!(dots, vec![Coordinate::new(4, 2), Coordinate::new(4, 3)]);
    assert!(vertical.occupies(Coordinate::new(4, 3)));
    assert!(!vertical.occupies(Coordinate::new(5, 2)));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(2, Coordinate::new(1, 1), Orientation::Horizontal);
    assert_eq!(ship.hit_points(), 2);
    assert!(!ship.register_hit());
    assert_eq!(ship.hit_points(), 1);
    assert!(ship.register_hit());
    assert!(ship.is_sunk());
    // never below zero
    assert!(!ship.register_hit());
    assert_eq!(ship.hit_points(), 0);
}

#[test]
fn test_coordinate_bounds() {
    assert!(Coordinate::new(1, 6).in_bounds(6));
    assert!(!Coordinate::new(0, 3).in_bounds(6));
    assert!(!Coordinate::new(7, 7).in_bounds(6));
    assert_eq!(Coordinate::new(2, 5).to_index(6), Some((4, 1)));
    assert_eq!(Coordinate::from_index(4, 1), Coordinate::new(2, 5));
    assert_eq!(Coordinate::new(1, 1).chebyshev(&Coordinate::new(3, 2)), 2);
}
