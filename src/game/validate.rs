//! Placement-legality checking and attack detection.
//!
//! Everything here reads the board and never mutates it.

use super::board::{Board, SIZE};
use super::coordinate::Coordinate;
use crate::error::PositionError;

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Decide whether `token` may be placed on `board` right now.
///
/// Checks run in order and stop at the first failure: presence, length,
/// range, occupancy. Occupancy is consulted only for on-board coordinates.
pub fn check_placement(token: Option<&str>, board: &Board) -> Result<(), PositionError> {
    legal_coordinate(token, board).map(|_| ())
}

/// Same checks as [`check_placement`], returning the accepted square.
pub fn legal_coordinate(token: Option<&str>, board: &Board) -> Result<Coordinate, PositionError> {
    let token = token.ok_or(PositionError::AbsentInput)?;
    if token.chars().count() != 2 {
        return Err(PositionError::BadFormat);
    }

    let coord = Coordinate::parse(Some(token)).map_err(|_| PositionError::BadFormat)?;
    if !coord.is_on_board() {
        return Err(PositionError::OutOfRange);
    }
    if board.is_occupied(coord) {
        return Err(PositionError::Occupied);
    }

    Ok(coord)
}

/// True iff no queen on the board attacks another.
///
/// Holds vacuously for an empty or single-queen board and does not depend
/// on how many queens are present.
pub fn is_solution_valid(board: &Board) -> bool {
    find_conflict(board).is_none()
}

/// First pair of queens found attacking each other, scanning queens in
/// row-major order.
pub fn find_conflict(board: &Board) -> Option<(Coordinate, Coordinate)> {
    board
        .queens()
        .find_map(|queen| attacker_of(board, queen).map(|other| (queen, other)))
}

/// Another queen sharing a row, column or diagonal with `queen`, if any.
pub fn attacker_of(board: &Board, queen: Coordinate) -> Option<Coordinate> {
    line_attacker(board, queen).or_else(|| diagonal_attacker(board, queen))
}

/// Scan the other squares of the queen's row and column
fn line_attacker(board: &Board, queen: Coordinate) -> Option<Coordinate> {
    let (row, col) = (queen.row(), queen.col());

    let in_row = (0..SIZE as i32)
        .filter(|&c| c != col)
        .map(|c| Coordinate::new(row, c));
    let in_col = (0..SIZE as i32)
        .filter(|&r| r != row)
        .map(|r| Coordinate::new(r, col));

    in_row.chain(in_col).find(|&sq| board.is_occupied(sq))
}

/// Walk each diagonal ray outward until it leaves the board
fn diagonal_attacker(board: &Board, queen: Coordinate) -> Option<Coordinate> {
    for (dr, dc) in DIAGONALS {
        let mut sq = queen.offset(dr, dc);
        while sq.is_on_board() {
            if board.is_occupied(sq) {
                return Some(sq);
            }
            sq = sq.offset(dr, dc);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(tokens: &[&str]) -> Board {
        let mut board = Board::new();
        for token in tokens {
            board.place_queen(token);
        }
        board
    }

    #[test]
    fn test_valid_placements() {
        let board = Board::new();
        assert_eq!(check_placement(Some("A1"), &board), Ok(()));
        assert_eq!(check_placement(Some("H8"), &board), Ok(()));
        assert_eq!(check_placement(Some("e4"), &board), Ok(()));
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(
            check_placement(None, &Board::new()),
            Err(PositionError::AbsentInput)
        );
    }

    #[test]
    fn test_bad_format() {
        let board = Board::new();
        for token in ["", "A", "A11", "  A1"] {
            assert_eq!(
                check_placement(Some(token), &board),
                Err(PositionError::BadFormat),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::new();
        for token in ["I1", "A9", "A0", "11", "Z9", "@5"] {
            assert_eq!(
                check_placement(Some(token), &board),
                Err(PositionError::OutOfRange),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_occupied_case_insensitive() {
        let board = board_with(&["C3"]);
        assert_eq!(check_placement(Some("C3"), &board), Err(PositionError::Occupied));
        assert_eq!(check_placement(Some("c3"), &board), Err(PositionError::Occupied));
        assert_eq!(check_placement(Some("C4"), &board), Ok(()));
    }

    #[test]
    fn test_format_checked_before_occupancy() {
        let board = board_with(&["A1"]);
        assert_eq!(check_placement(Some("A1 "), &board), Err(PositionError::BadFormat));
    }

    #[test]
    fn test_check_does_not_mutate() {
        let board = board_with(&["D4"]);
        let before = board.clone();
        for _ in 0..3 {
            let _ = check_placement(Some("E5"), &board);
            let _ = check_placement(Some("D4"), &board);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_is_valid() {
        let mut board = Board::new();
        assert!(is_solution_valid(&board));
        board.clear();
        board.clear();
        assert!(is_solution_valid(&board));
    }

    #[test]
    fn test_non_attacking_pair_is_valid() {
        assert!(is_solution_valid(&board_with(&["A1", "B3"])));
    }

    #[test]
    fn test_same_column_attack() {
        let board = board_with(&["A1", "A5"]);
        assert!(!is_solution_valid(&board));
    }

    #[test]
    fn test_same_row_attack() {
        let board = board_with(&["A1", "H1"]);
        assert!(!is_solution_valid(&board));
        let (first, second) = find_conflict(&board).unwrap();
        assert_eq!(first.to_string(), "A1");
        assert_eq!(second.to_string(), "H1");
    }

    #[test]
    fn test_diagonal_attacks() {
        assert!(!is_solution_valid(&board_with(&["A1", "B2"])));
        assert!(!is_solution_valid(&board_with(&["A1", "H8"])));
        assert!(!is_solution_valid(&board_with(&["C1", "A3"])));
        assert!(!is_solution_valid(&board_with(&["H1", "A8"])));
    }

    #[test]
    fn test_known_solution() {
        let board = board_with(&["A1", "b7", "c5", "d8", "e2", "f4", "g6", "h3"]);
        assert_eq!(board.queen_count(), 8);
        assert!(is_solution_valid(&board));
        assert_eq!(find_conflict(&board), None);
    }

    #[test]
    fn test_ninth_queen_breaks_solution() {
        let mut board = board_with(&["A1", "B7", "C5", "D8", "E2", "F4", "G6", "H3"]);
        board.place_queen("D1");
        assert!(!is_solution_valid(&board));
    }

    #[test]
    fn test_full_board_is_invalid() {
        let mut board = Board::new();
        for letter in 'A'..='H' {
            for digit in '1'..='8' {
                board.place_queen(&format!("{letter}{digit}"));
            }
        }
        assert!(!is_solution_valid(&board));
    }

    #[test]
    fn test_attacker_of() {
        let board = board_with(&["D4", "G7"]);
        let d4 = Coordinate::parse(Some("D4")).unwrap();
        let g7 = Coordinate::parse(Some("G7")).unwrap();
        assert_eq!(attacker_of(&board, d4), Some(g7));
        assert_eq!(attacker_of(&board, g7), Some(d4));
    }
}
