//! Minimax search with alpha-beta pruning.
//!
//! The search is exhaustive: tic-tac-toe's tree is small enough that every
//! line is played out to a terminal board. Scores are always from the
//! perspective of [`MAXIMIZER`] and are not discounted by depth.
//!
//! The caller lends the board mutably. Trial moves are placed through
//! [`Board::place`], whose guard restores the square when it goes out of
//! scope, so the board is identical to its input when the search returns.

use crate::position::Position;
use crate::rules::{available_moves, evaluate};
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The engine's mark. Positive scores favour this player.
pub const MAXIMIZER: Player = Player::X;

/// The opponent's mark.
pub const MINIMIZER: Player = Player::O;

/// Terminal score of an outcome from `maximizer`'s point of view.
///
/// Win for `maximizer` is `+1`, loss is `-1`, draw is `0`. Ongoing boards
/// have no score.
pub fn score(outcome: Outcome, maximizer: Player) -> Option<i32> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Draw => Some(0),
        Outcome::Won(winner) if winner == maximizer => Some(1),
        Outcome::Won(_) => Some(-1),
    }
}

/// Minimax value of `board` with `maximizing` indicating whose turn it is.
///
/// `alpha` and `beta` bound the window; pass `i32::MIN` and `i32::MAX` for an
/// exact value. When a branch is cut off the returned value is a bound that
/// lies outside the window.
pub fn minimax(board: &mut Board, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    Counters::default().minimax(board, maximizing, alpha, beta)
}

/// Chooses the best move for [`MAXIMIZER`].
///
/// Moves are tried in row-major order and only a strictly better score
/// replaces the current choice, so the first of several equally good moves
/// wins. Returns `None` only when the board has no empty square. Callers
/// should check [`evaluate`] first; a board that is already won still has
/// empty squares and will get a move.
pub fn find_best_move(board: &mut Board) -> Option<Position> {
    analyze(board).best_move
}

/// Result of a root search, with the work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The chosen move, if any square was empty.
    pub best_move: Option<Position>,
    /// Minimax value of the chosen move.
    pub score: Option<i32>,
    /// Positions visited below the root.
    pub nodes: u64,
    /// Branches abandoned by alpha-beta cutoffs.
    pub cutoffs: u64,
}

/// Runs the root search behind [`find_best_move`] and reports its work.
#[instrument(skip(board), fields(empty = available_moves(board).len()))]
pub fn analyze(board: &mut Board) -> SearchReport {
    let mut counters = Counters::default();
    let mut best: Option<(Position, i32)> = None;

    for pos in available_moves(board) {
        let Some(mut placed) = board.place(pos, MAXIMIZER) else {
            continue;
        };
        let value = counters.minimax(&mut placed, false, i32::MIN, i32::MAX);
        drop(placed);

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    let report = SearchReport {
        best_move: best.map(|(pos, _)| pos),
        score: best.map(|(_, value)| value),
        nodes: counters.nodes,
        cutoffs: counters.cutoffs,
    };
    debug!(
        best_move = ?report.best_move,
        score = ?report.score,
        nodes = report.nodes,
        cutoffs = report.cutoffs,
        "Search complete"
    );
    report
}

#[derive(Debug, Default)]
struct Counters {
    nodes: u64,
    cutoffs: u64,
}

impl Counters {
    fn minimax(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(terminal) = score(evaluate(board), MAXIMIZER) {
            return terminal;
        }

        let (mark, mut best) = if maximizing {
            (MAXIMIZER, i32::MIN)
        } else {
            (MINIMIZER, i32::MAX)
        };

        for pos in available_moves(board) {
            let Some(mut placed) = board.place(pos, mark) else {
                continue;
            };
            let child = self.minimax(&mut placed, !maximizing, alpha, beta);
            drop(placed);

            if maximizing {
                best = best.max(child);
                alpha = alpha.max(best);
            } else {
                best = best.min(child);
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        best
    }
}
