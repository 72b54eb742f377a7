use warships::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u64, 6>::try_new().is_ok());
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u64, 6>::new();
    assert!(bb.is_empty());
    bb.set(2, 3).unwrap();
    assert!(bb.get(2, 3).unwrap());
    assert_eq!(
        bb.set(6, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 6, col: 0 }
    );
}

#[test]
fn test_dilate_clips_to_grid() {
    let corner = BitBoard::<u64, 6>::from_cells([(0, 0)]).unwrap();
    let grown: Vec<_> = corner.dilate().iter_set_bits().collect();
    assert_eq!(grown, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    let middle = BitBoard::<u64, 6>::from_cells([(2, 2)]).unwrap();
    assert_eq!(middle.dilate().count_ones(), 9);
    assert_eq!((middle.dilate() & !middle).count_ones(), 8);
}

#[test]
fn test_not_stays_inside_grid() {
    let empty = BitBoard::<u64, 6>::new();
    assert_eq!((!empty).count_ones(), 36);
    assert_eq!(!empty, BitBoard::<u64, 6>::full());
    assert_eq!(empty.nth_set_bit(0), None);
    assert_eq!((!empty).nth_set_bit(7), Some((1, 1)));
}

#[test]
fn test_from_fn_sets_matching_cells() {
    let diagonal = BitBoard::<u64, 6>::from_fn(|r, c| r == c);
    assert_eq!(diagonal.count_ones(), 6);
    assert_eq!(diagonal.get(3, 3), Ok(true));
    assert_eq!(diagonal.get(3, 4), Ok(false));
    assert_eq!(BitBoard::<u64, 6>::from_fn(|_, _| true), BitBoard::full());
}
