#![allow(dead_code)]

use broadside::{Cell, Fleet};

fn run(row: usize, col: usize, len: usize, horizontal: bool) -> Vec<Cell> {
    (0..len)
        .map(|i| {
            if horizontal {
                Cell::new(row, col + i)
            } else {
                Cell::new(row + i, col)
            }
        })
        .collect()
}

/// A legal layout, in the order battleship, cruisers, destroyers, submarines.
///
/// ```text
///     A B C D E F G H I J
///  1  . . . . . . S S S S
///  2  . . . . . . . . . .
///  3  S S S . S S S . . .
///  4  . . . . . . . . . .
///  5  S S . S S . S S . .
///  6  . . . . . . . . . .
///  7  S . S . S . S . . .
/// ```
pub fn standard_layout() -> Vec<Vec<Cell>> {
    vec![
        run(0, 6, 4, true),
        run(2, 0, 3, true),
        run(2, 4, 3, true),
        run(4, 0, 2, true),
        run(4, 3, 2, true),
        run(4, 6, 2, true),
        vec![Cell::new(6, 0)],
        vec![Cell::new(6, 2)],
        vec![Cell::new(6, 4)],
        vec![Cell::new(6, 6)],
    ]
}

/// A legal layout with a horizontal destroyer (ship index 3) at (2,3)-(2,4)
/// and a submarine (ship index 6) in the corner at (0,0).
pub fn destroyer_layout() -> Vec<Vec<Cell>> {
    vec![
        run(9, 0, 4, true),
        run(5, 0, 3, true),
        run(5, 4, 3, true),
        run(2, 3, 2, true),
        run(7, 0, 2, true),
        run(7, 3, 2, true),
        vec![Cell::new(0, 0)],
        vec![Cell::new(0, 9)],
        vec![Cell::new(9, 9)],
        vec![Cell::new(3, 8)],
    ]
}

pub fn standard_fleet() -> Fleet {
    Fleet::validate(&standard_layout()).unwrap()
}

pub fn destroyer_fleet() -> Fleet {
    Fleet::validate(&destroyer_layout()).unwrap()
}

/// Brute-force acceptance rule for fleet proposals.
pub fn reference_accepts(proposal: &[Vec<Cell>]) -> bool {
    let mut counts = [0usize; 5];
    for group in proposal {
        if group.is_empty() || group.len() > 4 {
            return false;
        }
        counts[group.len()] += 1;
    }
    if counts != [0, 4, 3, 2, 1] {
        return false;
    }
    for group in proposal {
        let same_row = group.iter().all(|c| c.row == group[0].row);
        let same_col = group.iter().all(|c| c.col == group[0].col);
        if !same_row && !same_col {
            return false;
        }
        let mut along: Vec<usize> = group
            .iter()
            .map(|c| if same_row { c.col } else { c.row })
            .collect();
        along.sort();
        for pair in along.windows(2) {
            if pair[0].checked_add(1) != Some(pair[1]) {
                return false;
            }
        }
    }
    if proposal.iter().flatten().any(|c| c.row > 9 || c.col > 9) {
        return false;
    }
    for (i, a) in proposal.iter().enumerate() {
        for b in proposal.iter().skip(i + 1) {
            for x in a {
                for y in b {
                    let dist = x.row.abs_diff(y.row).max(x.col.abs_diff(y.col));
                    if dist < 2 {
                        return false;
                    }
                }
            }
        }
    }
    true
}
