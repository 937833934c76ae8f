use tracing::{debug, info};

use super::board::Board;
use super::coordinate::Coordinate;
use super::validate::{find_conflict, legal_coordinate};
use crate::error::SessionError;

/// Number of queens a complete placement holds.
pub const QUEENS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Solved,
    Attacked { first: Coordinate, second: Coordinate },
}

impl Verdict {
    pub fn is_solved(&self) -> bool {
        matches!(self, Verdict::Solved)
    }
}

/// Collects exactly [`QUEENS`] accepted positions on a board.
///
/// The board and validator work for any number of queens; the
/// eight-queen rule is enforced here.
#[derive(Debug, Clone, Default)]
pub struct PlacementSession {
    board: Board,
    placed: Vec<Coordinate>,
}

impl PlacementSession {
    pub fn new() -> Self {
        PlacementSession {
            board: Board::new(),
            placed: Vec::with_capacity(QUEENS),
        }
    }

    /// Place every token in order, stopping at the first rejection.
    pub fn from_positions<S: AsRef<str>>(tokens: &[S]) -> Result<Self, SessionError> {
        if tokens.len() != QUEENS {
            return Err(SessionError::WrongCount {
                expected: QUEENS,
                got: tokens.len(),
            });
        }

        let mut session = Self::new();
        for token in tokens {
            session.submit(Some(token.as_ref()))?;
        }
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted positions, in the order they were submitted
    pub fn placed(&self) -> &[Coordinate] {
        &self.placed
    }

    /// 1-based number of the queen being entered next
    pub fn next_queen_number(&self) -> usize {
        self.placed.len() + 1
    }

    pub fn remaining(&self) -> usize {
        QUEENS - self.placed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.placed.len() == QUEENS
    }

    /// Check and place the next queen.
    ///
    /// A rejected token leaves the session unchanged.
    pub fn submit(&mut self, token: Option<&str>) -> Result<Coordinate, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Complete(QUEENS));
        }

        let coord =
            legal_coordinate(token, &self.board).map_err(|source| SessionError::Rejected {
                queen: self.next_queen_number(),
                token: token.unwrap_or_default().to_string(),
                source,
            })?;
        self.board.place(coord);
        self.placed.push(coord);
        debug!(%coord, queen = self.placed.len(), "position accepted");

        Ok(coord)
    }

    /// Decide the outcome once all queens are placed.
    pub fn verdict(&self) -> Result<Verdict, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::Incomplete {
                placed: self.placed.len(),
                required: QUEENS,
            });
        }

        let verdict = match find_conflict(&self.board) {
            None => Verdict::Solved,
            Some((first, second)) => Verdict::Attacked { first, second },
        };
        info!(?verdict, "placement evaluated");
        Ok(verdict)
    }

    /// Clear the board and start collecting from the first queen again
    pub fn reset(&mut self) {
        self.board.clear();
        self.placed.clear();
    }
}
