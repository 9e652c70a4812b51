//! One round of play against the engine.
//!
//! The human always plays [`HUMAN`] (O) and the engine [`ENGINE`] (X). A turn
//! validates and applies the human's move, then lets the engine reply unless
//! the human's move ended the game. Every rejection happens before the board
//! is written.

use derive_getters::Getters;
use perfect_tictactoe::{
    Board, MAXIMIZER, MINIMIZER, MoveError, Outcome, Player, Position, evaluate, find_best_move,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// The human player's mark.
pub const HUMAN: Player = MINIMIZER;

/// The engine's mark.
pub const ENGINE: Player = MAXIMIZER;

/// What happened during one call to [`play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, derive_new::new)]
pub struct TurnReport {
    /// Square the human took.
    human_move: Position,
    /// Square the engine took, absent when the human's move ended the game.
    ai_move: Option<Position>,
    /// Outcome after the turn.
    outcome: Outcome,
}

/// Plays the human's move at `position`, then the engine's reply.
///
/// Fails with [`MoveError::GameOver`] on a finished board and with
/// [`MoveError::SquareOccupied`] when the square is taken; the board is left
/// untouched in both cases.
#[instrument(skip(board))]
pub fn play_turn(board: &mut Board, position: Position) -> Result<TurnReport, MoveError> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        warn!(%outcome, "Move attempted on a finished game");
        return Err(MoveError::GameOver(outcome));
    }

    if !board.apply_move(position, HUMAN) {
        warn!(%position, "Square already occupied");
        return Err(MoveError::SquareOccupied(position));
    }
    debug!(%position, "Human move applied");

    let outcome = evaluate(board);
    if outcome.is_terminal() {
        info!(%outcome, "Game ended on the human's move");
        return Ok(TurnReport::new(position, None, outcome));
    }

    let reply = ai_turn(board)?;
    let outcome = evaluate(board);
    info!(human = %position, engine = %reply, %outcome, "Turn completed");
    Ok(TurnReport::new(position, Some(reply), outcome))
}

/// Lets the engine move on its own, e.g. to open the game.
///
/// A full board yields [`MoveError::NoMoveAvailable`]; a won board yields
/// [`MoveError::GameOver`].
#[instrument(skip(board))]
pub fn ai_turn(board: &mut Board) -> Result<Position, MoveError> {
    match evaluate(board) {
        Outcome::Ongoing => {}
        Outcome::Draw => return Err(MoveError::NoMoveAvailable),
        won @ Outcome::Won(_) => return Err(MoveError::GameOver(won)),
    }

    let position = find_best_move(board).ok_or(MoveError::NoMoveAvailable)?;
    if !board.apply_move(position, ENGINE) {
        return Err(MoveError::SquareOccupied(position));
    }
    debug!(%position, "Engine move applied");
    Ok(position)
}

/// Clears `board` for a new game and, if the engine opens, plays its first
/// move.
///
/// Callers holding a shared board must keep its lock across this call so no
/// other move lands between the clear and the opening.
#[instrument(skip(board))]
pub fn new_game(board: &mut Board, ai_moves_first: bool) -> Result<Option<Position>, MoveError> {
    *board = Board::new();
    if !ai_moves_first {
        return Ok(None);
    }
    let opening = ai_turn(board)?;
    info!(%opening, "Engine opened the game");
    Ok(Some(opening))
}
