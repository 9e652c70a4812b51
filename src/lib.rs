//! Perfect Games - play tic-tac-toe against a perfect engine
//!
//! The engine itself lives in [`perfect_tictactoe`]; this crate holds the
//! pieces around it.
//!
//! # Architecture
//!
//! - **Turn**: validates the human's move and asks the engine for a reply
//! - **Session**: keeps one independently locked board per game
//! - **Server**: REST API over HTTP
//! - **Console**: interactive game on stdin/stdout
//!
//! # Example
//!
//! ```
//! use perfect_games::{Board, Position, play_turn};
//!
//! let mut board = Board::new();
//! let report = play_turn(&mut board, Position::Center).unwrap();
//! assert!(report.ai_move().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod server;
mod session;
mod turn;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console game
pub use console::{InputError, parse_move, run as run_console};

// Crate-level exports - HTTP server
pub use server::{
    ApiError, AppState, BoardResponse, Coordinates, ErrorResponse, GameStatus, MakeMoveRequest,
    Winner, router, serve,
};

// Crate-level exports - Session management
pub use session::{BoardStore, SessionId, SessionManager, SharedBoard, lock_board};

// Crate-level exports - Turn orchestration
pub use turn::{ENGINE, HUMAN, TurnReport, ai_turn, new_game, play_turn};

// Crate-level exports - Game types
pub use perfect_tictactoe::{Board, MoveError, Outcome, Player, Position, Square};
