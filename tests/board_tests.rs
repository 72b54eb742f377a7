use warships::{
    Board, CellState, CellView, Coordinate, HitResult, Orientation, PlacementError, Ship,
    ShotError,
};

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn board_with(ships: &[Ship]) -> Board {
    let mut board = Board::new();
    for ship in ships {
        board.place_ship(*ship).unwrap();
    }
    board
}

#[test]
fn test_place_and_sink_cruiser() {
    let mut board = board_with(&[Ship::new(3, c(1, 1), Orientation::Horizontal)]);
    for x in 1..=3 {
        assert_eq!(board.cell(c(x, 1)), Some(CellState::ShipOccupied));
    }

    assert_eq!(board.fire_at(c(2, 1)).unwrap(), HitResult::Hit);
    assert_eq!(board.ships().next().unwrap().hit_points(), 2);

    // repeated shot is rejected and changes nothing
    let before = board.clone();
    assert_eq!(board.fire_at(c(2, 1)).unwrap_err(), ShotError::AlreadyTargeted);
    assert_eq!(board, before);

    assert_eq!(board.fire_at(c(1, 1)).unwrap(), HitResult::Hit);
    assert_eq!(board.fire_at(c(3, 1)).unwrap(), HitResult::Sunk(3));
    assert!(!board.any_ship_alive());

    // ring around (1,1)-(3,1), clipped to the board
    for x in 1..=4 {
        assert_eq!(board.cell(c(x, 2)), Some(CellState::DestroyedAdjacent));
    }
    assert_eq!(board.cell(c(4, 1)), Some(CellState::DestroyedAdjacent));
    assert_eq!(board.cell(c(5, 1)), Some(CellState::Empty));
    assert_eq!(board.cell(c(1, 3)), Some(CellState::Empty));
    for x in 1..=3 {
        assert_eq!(board.cell(c(x, 1)), Some(CellState::Hit));
    }
}

#[test]
fn test_sunk_sweep_keeps_misses() {
    let mut board = board_with(&[Ship::new(1, c(3, 3), Orientation::Vertical)]);
    assert_eq!(board.fire_at(c(2, 2)).unwrap(), HitResult::Miss);
    assert_eq!(board.fire_at(c(3, 3)).unwrap(), HitResult::Sunk(1));
    assert_eq!(board.cell(c(2, 2)), Some(CellState::Missed));
    assert_eq!(board.cell(c(4, 4)), Some(CellState::DestroyedAdjacent));
}

#[test]
fn test_destroyed_adjacent_is_not_fireable() {
    let mut board = board_with(&[
        Ship::new(1, c(1, 1), Orientation::Horizontal),
        Ship::new(1, c(5, 5), Orientation::Horizontal),
    ]);
    board.fire_at(c(1, 1)).unwrap();
    assert_eq!(board.fire_at(c(2, 2)).unwrap_err(), ShotError::AlreadyTargeted);
    assert!(board.any_ship_alive());
}

#[test]
fn test_out_of_bounds_placement_and_shot() {
    let mut board = Board::new();
    for bow in [c(0, 0), c(7, 7)] {
        let ship = Ship::new(1, bow, Orientation::Horizontal);
        assert!(!board.is_placement_free(&ship));
        assert_eq!(board.place_ship(ship).unwrap_err(), PlacementError::OutOfBounds);
        assert_eq!(board.fire_at(bow).unwrap_err(), ShotError::OutOfBounds);
    }
    // hangs off the right edge
    let ship = Ship::new(3, c(5, 2), Orientation::Horizontal);
    assert_eq!(board.place_ship(ship).unwrap_err(), PlacementError::OutOfBounds);
    let ship = Ship::new(2, c(2, 6), Orientation::Vertical);
    assert_eq!(board.place_ship(ship).unwrap_err(), PlacementError::OutOfBounds);
    assert_eq!(board.ship_count(), 0);
}

#[test]
fn test_overlap_and_touching_rejected() {
    let mut board = board_with(&[Ship::new(2, c(3, 3), Orientation::Vertical)]);
    let before = board.clone();

    let overlapping = Ship::new(2, c(2, 4), Orientation::Horizontal);
    assert_eq!(board.place_ship(overlapping).unwrap_err(), PlacementError::Overlap);

    // diagonal contact counts as touching
    let diagonal = Ship::new(1, c(4, 5), Orientation::Horizontal);
    assert_eq!(board.place_ship(diagonal).unwrap_err(), PlacementError::Overlap);
    let side = Ship::new(3, c(4, 1), Orientation::Vertical);
    assert!(!board.is_placement_free(&side));
    assert_eq!(board, before);

    // one empty column in between is fine
    let spaced = Ship::new(3, c(5, 1), Orientation::Vertical);
    assert!(board.is_placement_free(&spaced));
    board.place_ship(spaced).unwrap();
    assert_eq!(board.ship_count(), 2);
}

#[test]
fn test_fleet_full() {
    let mut board = board_with(&[
        Ship::new(1, c(1, 1), Orientation::Horizontal),
        Ship::new(1, c(3, 1), Orientation::Horizontal),
        Ship::new(1, c(5, 1), Orientation::Horizontal),
        Ship::new(1, c(1, 3), Orientation::Horizontal),
        Ship::new(1, c(3, 3), Orientation::Horizontal),
        Ship::new(1, c(5, 3), Orientation::Horizontal),
    ]);
    let extra = Ship::new(1, c(1, 5), Orientation::Horizontal);
    assert_eq!(board.place_ship(extra).unwrap_err(), PlacementError::FleetFull);
}

#[test]
fn test_render_hides_ships_from_opponent() {
    let mut board = board_with(&[Ship::new(2, c(1, 1), Orientation::Vertical)]);
    board.fire_at(c(1, 1)).unwrap();
    board.fire_at(c(4, 4)).unwrap();

    let own = board.render(true);
    assert_eq!(own[0][0], CellView::Hit);
    assert_eq!(own[1][0], CellView::Ship);
    assert_eq!(own[3][3], CellView::Miss);

    let enemy = board.render(false);
    assert_eq!(enemy[1][0], CellView::Empty);
    assert_eq!(enemy[0][0], CellView::Hit);
    assert_eq!(enemy[3][3], CellView::Miss);

    board.set_ships_visible(true);
    assert_eq!(board.render(false)[1][0], CellView::Ship);
    assert_eq!(board.fog_view()[1][0], CellView::Empty);
}

#[test]
fn test_empty_board_has_no_ships_alive() {
    let board = Board::new();
    assert!(!board.any_ship_alive());
    assert_eq!(board.ship_map().count_ones(), 0);
}

#[test]
fn test_sunk_ring_renders_as_empty() {
    let mut board = board_with(&[Ship::new(1, c(3, 3), Orientation::Horizontal)]);
    assert_eq!(board.fire_at(c(3, 3)).unwrap(), HitResult::Sunk(1));
    assert_eq!(board.cell(c(2, 2)), Some(CellState::DestroyedAdjacent));

    board.set_ships_visible(true);
    for view in [board.render(true), board.render(false), board.fog_view()] {
        assert_eq!(view[1][1], CellView::Empty);
        assert_eq!(view[3][3], CellView::Empty);
        assert_eq!(view[2][2], CellView::Hit);
    }
}

#[test]
fn test_debug_output_nests_cleanly() {
    let text = format!("{:?}", Some(Board::new()));
    assert!(text.starts_with("Some(Board {"));
    assert!(text.ends_with("})"));
}
