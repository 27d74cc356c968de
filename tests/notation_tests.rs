use broadside::{parse_cell, parse_ship, Cell, NotationError};

#[test]
fn test_parse_cell() {
    assert_eq!(parse_cell("A1"), Ok(Cell::new(0, 0)));
    assert_eq!(parse_cell("B4"), Ok(Cell::new(3, 1)));
    assert_eq!(parse_cell("j10"), Ok(Cell::new(9, 9)));
    assert_eq!(parse_cell("  c3 "), Ok(Cell::new(2, 2)));
    // Syntax only; the board decides what is in range.
    assert_eq!(parse_cell("K1"), Ok(Cell::new(0, 10)));
    assert_eq!(parse_cell("A11"), Ok(Cell::new(10, 0)));
}

#[test]
fn test_parse_cell_errors() {
    assert_eq!(parse_cell(""), Err(NotationError::Empty));
    assert_eq!(parse_cell("1A"), Err(NotationError::MissingColumn));
    assert_eq!(parse_cell("A"), Err(NotationError::InvalidRow));
    assert_eq!(parse_cell("A0"), Err(NotationError::InvalidRow));
    assert_eq!(parse_cell("AB"), Err(NotationError::InvalidRow));
    assert_eq!(parse_cell("A-1"), Err(NotationError::InvalidRow));
    assert_eq!(parse_cell("A99999999999999999999999"), Err(NotationError::InvalidRow));
}

#[test]
fn test_display_round_trip() {
    assert_eq!(Cell::new(3, 1).to_string(), "B4");
    assert_eq!(Cell::new(9, 9).to_string(), "J10");
    assert_eq!(Cell::new(0, 30).to_string(), "(row 0, col 30)");
    assert_eq!(
        Cell::new(usize::MAX, 0).to_string(),
        format!("(row {}, col 0)", usize::MAX)
    );
    for r in 0..10 {
        for c in 0..10 {
            let cell = Cell::new(r, c);
            assert_eq!(parse_cell(&cell.to_string()), Ok(cell));
        }
    }
}

#[test]
fn test_parse_ship_lists() {
    let column = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
    assert_eq!(parse_ship("A1 A2 A3"), Ok(column.clone()));
    assert_eq!(parse_ship("A1,A2,A3"), Ok(column.clone()));
    assert_eq!(parse_ship("A1, A2,  A3"), Ok(column));
    assert_eq!(parse_ship("B4"), Ok(vec![Cell::new(3, 1)]));
}

#[test]
fn test_parse_ship_ranges() {
    let vertical = vec![Cell::new(3, 1), Cell::new(4, 1), Cell::new(5, 1)];
    assert_eq!(parse_ship("B4-B6"), Ok(vertical.clone()));
    assert_eq!(parse_ship("B6-B4"), Ok(vertical));
    assert_eq!(
        parse_ship("b4 - d4"),
        Ok(vec![Cell::new(3, 1), Cell::new(3, 2), Cell::new(3, 3)])
    );
    assert_eq!(parse_ship("C7-C7"), Ok(vec![Cell::new(6, 2)]));
    assert_eq!(parse_ship("A1-A10").map(|cells| cells.len()), Ok(10));
}

#[test]
fn test_parse_ship_errors() {
    assert_eq!(parse_ship("   "), Err(NotationError::Empty));
    assert_eq!(parse_ship("A1-B2"), Err(NotationError::DiagonalRange));
    assert_eq!(parse_ship("A1-A20"), Err(NotationError::RangeTooLong));
    assert_eq!(parse_ship("A1-"), Err(NotationError::Empty));
    assert_eq!(parse_ship("A1 X"), Err(NotationError::InvalidRow));
    assert_eq!(parse_ship("A1 9"), Err(NotationError::MissingColumn));
}
