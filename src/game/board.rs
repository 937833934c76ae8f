use tracing::{debug, warn};

use super::coordinate::Coordinate;

pub const SIZE: usize = 8;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SquareState {
    #[default]
    Empty,
    Queen,
}

/// Read-only copy of the grid, indexed `[row][col]`.
pub type Snapshot = [[SquareState; SIZE]; SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [SquareState; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [SquareState::Empty; CELLS],
        }
    }

    /// Get the state of a square, `None` if the coordinate is off the board
    pub fn get(&self, coord: Coordinate) -> Option<SquareState> {
        coord.index().map(|i| self.cells[i])
    }

    /// Check if an on-board square holds a queen
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(SquareState::Queen)
    }

    /// Put a queen on a square. Does not check legality; placing on an
    /// occupied square leaves it occupied. Off-board coordinates are ignored.
    pub fn place(&mut self, coord: Coordinate) {
        match coord.index() {
            Some(i) => {
                self.cells[i] = SquareState::Queen;
                debug!(%coord, queens = self.queen_count(), "queen placed");
            }
            None => warn!(%coord, "ignoring placement off the board"),
        }
    }

    /// Place a queen at a textual position such as `"d4"`.
    ///
    /// The token is trusted to have passed
    /// [`check_placement`](super::check_placement); tokens that do not parse
    /// are logged and ignored.
    pub fn place_queen(&mut self, token: &str) {
        match Coordinate::parse(Some(token)) {
            Ok(coord) => self.place(coord),
            Err(_) => warn!(token, "ignoring unparseable placement"),
        }
    }

    /// Reset every square to empty
    pub fn clear(&mut self) {
        self.cells = [SquareState::Empty; CELLS];
        debug!("board cleared");
    }

    /// Iterate over occupied squares in row-major order
    pub fn queens(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == SquareState::Queen)
            .map(|(i, _)| Coordinate::new((i / SIZE) as i32, (i % SIZE) as i32))
    }

    pub fn queen_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == SquareState::Queen)
            .count()
    }

    /// Copy the grid out for rendering
    pub fn snapshot(&self) -> Snapshot {
        let mut grid = [[SquareState::Empty; SIZE]; SIZE];
        for (i, &cell) in self.cells.iter().enumerate() {
            grid[i / SIZE][i % SIZE] = cell;
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
