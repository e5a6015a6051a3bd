//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side taking part in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// The human player (plays X).
    Player,
    /// The computer opponent (plays O).
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Returns the mark drawn for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Opponent => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a side.
    Occupied(Side),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from row-major cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Marks a cell for `side`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when `cell` is not in `0..9` and
    /// [`MoveError::SquareOccupied`] when the cell is already marked.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: usize, side: Side) -> Result<Position, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::OutOfRange(cell))?;
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.cells[cell] = Cell::Occupied(side);
        Ok(pos)
    }

    /// Returns a copy of this board with `pos` marked for `side`.
    ///
    /// Does not check occupancy; search code only calls it on empty cells.
    pub fn with_placed(&self, pos: Position, side: Side) -> Self {
        let mut next = *self;
        next.cells[pos.to_index()] = Cell::Occupied(side);
        next
    }

    /// Returns the unoccupied positions in ascending index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Cell::Empty => (idx + 1).to_string(),
                    Cell::Occupied(side) => side.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
