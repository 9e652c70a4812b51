//! Rule checks for tic-tac-toe.
//!
//! Each rule lives in its own module and can be tested in isolation;
//! [`evaluate`] composes them into the single outcome classification.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::position::Position;
use crate::types::{Board, Outcome};

/// Classifies the board.
///
/// A completed line wins (first match in scan order: rows, columns, then
/// the two diagonals). Otherwise a full board is a draw, and anything else
/// is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Every empty square in row-major order.
///
/// The order is stable; the search relies on it for reproducible
/// tie-breaks.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}
