use std::fmt;

use super::board::SIZE;
use crate::error::InvalidInput;

/// A square on the board as `(row, col)`.
///
/// Produced by [`Coordinate::parse`], which does no bounds checking: a token
/// such as `"Z9"` yields a coordinate that is not on the board. Signed
/// components keep such values representable instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    pub(crate) const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// Parse a textual position: column letter (case-insensitive) followed by
    /// row digit. Only the first two characters are read.
    pub fn parse(token: Option<&str>) -> Result<Coordinate, InvalidInput> {
        let mut chars = token.ok_or(InvalidInput)?.chars();
        let letter = chars.next().ok_or(InvalidInput)?.to_ascii_uppercase();
        let digit = chars.next().ok_or(InvalidInput)?;

        Ok(Coordinate {
            row: digit as i32 - '1' as i32,
            col: letter as i32 - 'A' as i32,
        })
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Check whether both components lie in `[0, 7]`
    pub fn is_on_board(&self) -> bool {
        (0..SIZE as i32).contains(&self.row) && (0..SIZE as i32).contains(&self.col)
    }

    /// Row-major offset into the flat cell array. `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * SIZE + self.col as usize)
        } else {
            None
        }
    }

    /// Step by `(dr, dc)`.
    pub(crate) fn offset(self, dr: i32, dc: i32) -> Coordinate {
        Coordinate::new(self.row + dr, self.col + dc)
    }
}

/// Canonical upper-case token, e.g. `E2`. Off-board coordinates print as
/// `(row, col)`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let letter = (b'A' + self.col as u8) as char;
            let digit = (b'1' + self.row as u8) as char;
            write!(f, "{letter}{digit}")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Parse a textual position. Shorthand for [`Coordinate::parse`].
pub fn parse_position(token: Option<&str>) -> Result<Coordinate, InvalidInput> {
    Coordinate::parse(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        let a1 = parse_position(Some("A1")).unwrap();
        assert_eq!((a1.row(), a1.col()), (0, 0));

        let h8 = parse_position(Some("H8")).unwrap();
        assert_eq!((h8.row(), h8.col()), (7, 7));
    }

    #[test]
    fn test_parse_lowercase() {
        let e2 = parse_position(Some("e2")).unwrap();
        assert_eq!((e2.row(), e2.col()), (1, 4));

        let d4 = parse_position(Some("D4")).unwrap();
        assert_eq!((d4.row(), d4.col()), (3, 3));
    }

    #[test]
    fn test_parse_every_square_both_cases() {
        for (col, letter) in ('A'..='H').enumerate() {
            for (row, digit) in ('1'..='8').enumerate() {
                for l in [letter, letter.to_ascii_lowercase()] {
                    let token = format!("{l}{digit}");
                    let coord = parse_position(Some(&token)).unwrap();
                    assert_eq!(coord, Coordinate::new(row as i32, col as i32), "{token}");
                    assert!(coord.is_on_board());
                }
            }
        }
    }

    #[test]
    fn test_parse_absent_or_empty() {
        assert_eq!(parse_position(None), Err(InvalidInput));
        assert_eq!(parse_position(Some("")), Err(InvalidInput));
        assert_eq!(parse_position(Some("A")), Err(InvalidInput));
    }

    #[test]
    fn test_parse_is_unchecked() {
        let i1 = parse_position(Some("I1")).unwrap();
        assert_eq!((i1.row(), i1.col()), (0, 8));
        assert!(!i1.is_on_board());

        let a0 = parse_position(Some("A0")).unwrap();
        assert_eq!(a0.row(), -1);
        assert_eq!(a0.index(), None);
    }

    #[test]
    fn test_parse_reads_only_two_chars() {
        let coord = parse_position(Some("B3xyz")).unwrap();
        assert_eq!((coord.row(), coord.col()), (2, 1));
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Coordinate::new(0, 0).index(), Some(0));
        assert_eq!(Coordinate::new(1, 0).index(), Some(8));
        assert_eq!(Coordinate::new(7, 7).index(), Some(63));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(1, 4).to_string(), "E2");
        assert_eq!(parse_position(Some("h8")).unwrap().to_string(), "H8");
        assert_eq!(Coordinate::new(-1, 0).to_string(), "(-1, 0)");
    }
}
