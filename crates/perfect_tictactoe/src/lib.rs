//! Perfect-play tic-tac-toe.
//!
//! Two components, in dependency order:
//!
//! - **Evaluator** ([`evaluate`], [`available_moves`], [`Board::apply_move`]):
//!   classifies any board as ongoing, drawn or won.
//! - **Search** ([`find_best_move`], [`minimax`], [`score`]): exhaustive
//!   minimax with alpha-beta pruning for the fixed maximizer [`MAXIMIZER`].
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Outcome, Position, evaluate, find_best_move};
//!
//! let mut board: Board = "XX. OO. ...".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::Ongoing);
//! assert_eq!(find_best_move(&mut board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
mod rules;
mod search;
mod types;

pub use error::{BoardParseError, MoveError};
pub use position::Position;
pub use rules::{available_moves, check_winner, evaluate, is_full};
pub use search::{
    MAXIMIZER, MINIMIZER, SearchReport, analyze, find_best_move, minimax, score,
};
pub use types::{Board, Outcome, Placement, Player, Square};
