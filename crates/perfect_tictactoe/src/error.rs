//! Error types for move validation and board parsing.

use crate::position::Position;
use crate::types::Outcome;

/// Error that can occur when validating or applying a move.
///
/// Every variant is raised before the board is touched; a rejected move
/// never mutates anything.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinate lies outside the 3x3 grid.
    #[display("Position ({row}, {col}) is off the board (rows and columns are 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over ({_0})")]
    GameOver(#[error(not(source))] Outcome),

    /// The engine was asked to move but no empty square remains.
    #[display("No move available: the board is full")]
    NoMoveAvailable,
}

impl MoveError {
    /// True for the recoverable "re-prompt the player" errors.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. } | MoveError::SquareOccupied(_))
    }
}

/// Error parsing a board from text notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// Unrecognised cell symbol.
    #[display("Unexpected cell symbol {_0:?} (expected X, O, '.', '_' or a digit 1-9)")]
    UnknownSymbol(#[error(not(source))] char),

    /// Notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}
