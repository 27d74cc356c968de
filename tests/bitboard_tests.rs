use broadside::{BitBoard, BoardError, Cell};

fn board(cells: &[(usize, usize)]) -> BitBoard {
    BitBoard::from_cells(cells.iter().map(|&c| Cell::from(c))).unwrap()
}

#[test]
fn test_set_and_contains() {
    let mut bb = BitBoard::new();
    assert!(bb.is_empty());
    bb.set(Cell::new(1, 1)).unwrap();
    assert!(bb.contains(Cell::new(1, 1)));
    assert!(!bb.contains(Cell::new(1, 2)));
    assert!(!bb.contains(Cell::new(11, 1)));
    assert_eq!(bb.count(), 1);
}

#[test]
fn test_off_board_rejected() {
    let mut bb = BitBoard::new();
    assert_eq!(
        bb.set(Cell::new(0, 10)).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 10 }
    );
    assert!(BitBoard::from_cells([Cell::new(3, 3), Cell::new(10, 3)]).is_err());
}

#[test]
fn test_iter_row_major() {
    let bb = board(&[(9, 9), (0, 1), (3, 3)]);
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(3, 3), Cell::new(9, 9)]);
}

#[test]
fn test_neighbourhood_in_the_open() {
    let n = board(&[(5, 5)]).neighbourhood();
    assert_eq!(n.count(), 9);
    assert!(n.contains(Cell::new(4, 4)));
    assert!(n.contains(Cell::new(6, 6)));
}

#[test]
fn test_neighbourhood_does_not_wrap() {
    // Right edge must not bleed into the next row's first column.
    let right = board(&[(0, 9)]).neighbourhood();
    assert_eq!(right.count(), 4);
    assert!(!right.contains(Cell::new(1, 0)));
    assert!(!right.contains(Cell::new(0, 0)));

    let left = board(&[(5, 0)]).neighbourhood();
    assert_eq!(left.count(), 6);
    assert!(!left.contains(Cell::new(4, 9)));

    let bottom = board(&[(9, 9)]).neighbourhood();
    assert_eq!(bottom.count(), 4);
}

#[test]
fn test_halo_of_horizontal_ship() {
    let ship = board(&[(2, 3), (2, 4)]);
    let halo = ship.halo();
    assert_eq!(halo.count(), 10);
    assert!(!halo.intersects(ship));
    for cell in [(1, 3), (1, 4), (1, 5), (3, 3), (3, 4), (3, 5), (2, 2), (2, 5), (1, 2), (3, 2)] {
        assert!(halo.contains(Cell::from(cell)), "missing {:?}", cell);
    }
}

#[test]
fn test_set_operations() {
    let a = board(&[(0, 0), (1, 1)]);
    let b = board(&[(1, 1), (2, 2)]);
    assert_eq!((a & b).count(), 1);
    assert_eq!((a | b).count(), 3);
    assert!(a.intersects(b));
    assert_eq!((!BitBoard::new()).count(), 100);
    assert_eq!((!a).count(), 98);
}

#[test]
fn test_raw_bits() {
    assert_eq!(BitBoard::new().into_raw(), 0);
    assert_eq!(BitBoard::from_raw(u128::MAX).into_raw(), (1u128 << 100) - 1);
    assert_eq!(board(&[(0, 0), (0, 2)]).into_raw(), 0b101);
    assert_eq!(BitBoard::from_raw(1 << 11), board(&[(1, 1)]));
}
