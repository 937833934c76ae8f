//! Eight Queens core: coordinate parsing, the board, placement-legality
//! checking, attack detection, and the eight-queen placement session.

mod board;
mod coordinate;
mod session;
mod validate;

pub use board::{Board, Snapshot, SquareState, CELLS, SIZE};
pub use coordinate::{parse_position, Coordinate};
pub use session::{PlacementSession, Verdict, QUEENS};
pub use validate::{attacker_of, check_placement, find_conflict, is_solution_valid, legal_coordinate};
