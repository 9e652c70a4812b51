//! REST API for playing against the engine over HTTP.
//!
//! Routes:
//!
//! - `GET /health`
//! - `GET /games/{id}` - current board, 404 for an unknown game
//! - `DELETE /games/{id}` - forget a game
//! - `POST /games/{id}/move` - body `{"row": r, "col": c}`; plays the human's
//!   move and the engine's reply, starting the game on first use
//! - `POST /games/{id}/reset` - start a fresh game

use crate::config::GameConfig;
use crate::session::{BoardStore, SessionId, SessionManager, lock_board};
use crate::turn::{new_game, play_turn};
use anyhow::Context;
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use perfect_tictactoe::{Board, MoveError, Outcome, Player, Position, evaluate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Request for making a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeMoveRequest {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

/// A square as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

impl From<Position> for Coordinates {
    fn from(position: Position) -> Self {
        Self {
            row: position.row(),
            col: position.col(),
        }
    }
}

/// Whether the game continues after a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// The game is still in progress.
    Success,
    /// The game has finished.
    GameOver,
}

/// Who won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// X completed a line.
    X,
    /// O completed a line.
    O,
    /// The board filled up without a line.
    Tie,
}

impl Winner {
    /// Winner of a finished outcome, `None` while the game is in progress.
    pub fn of(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(Winner::Tie),
            Outcome::Won(Player::X) => Some(Winner::X),
            Outcome::Won(Player::O) => Some(Winner::O),
        }
    }
}

/// Board state returned by every game route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardResponse {
    /// Whether play continues.
    pub status: GameStatus,
    /// Rows of `"X"`, `"O"` or `" "`.
    pub board: [[char; 3]; 3],
    /// Current outcome.
    pub outcome: Outcome,
    /// Set once the game is over.
    pub winner: Option<Winner>,
    /// The engine's latest move, if this request made one.
    pub ai_move: Option<Coordinates>,
}

impl BoardResponse {
    /// Describes `board`, including the engine's move from this request.
    pub fn new(board: &Board, ai_move: Option<Position>) -> Self {
        let outcome = evaluate(board);
        Self {
            status: if outcome.is_terminal() {
                GameStatus::GameOver
            } else {
                GameStatus::Success
            },
            board: board.rows(),
            outcome,
            winner: Winner::of(outcome),
            ai_move: ai_move.map(Coordinates::from),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// Human-readable reason.
    pub message: String,
}

/// A failed request, rendered as a JSON error.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ApiError {
    /// The move was rejected.
    #[display("{_0}")]
    Move(MoveError),

    /// No game exists under this id.
    #[from(skip)]
    #[display("No game with id {_0:?}")]
    UnknownSession(SessionId),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Move(MoveError::OutOfRange { .. } | MoveError::SquareOccupied(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Move(MoveError::GameOver(_) | MoveError::NoMoveAvailable) => {
                StatusCode::CONFLICT
            }
            ApiError::UnknownSession(_) => StatusCode::NOT_FOUND,
        };
        let body = ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Shared state for the route handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn BoardStore>,
    ai_moves_first: bool,
}

impl AppState {
    /// Creates handler state over `store`.
    pub fn new(store: Arc<dyn BoardStore>, ai_moves_first: bool) -> Self {
        Self {
            store,
            ai_moves_first,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/games/{id}", get(get_board).delete(delete_game))
        .route("/games/{id}/move", post(make_move))
        .route("/games/{id}/reset", post(reset_game))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

/// Binds the configured address and serves until the process exits.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &GameConfig) -> anyhow::Result<()> {
    let state = AppState::new(Arc::new(SessionManager::new()), *config.ai_moves_first());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(state))]
async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardResponse>, ApiError> {
    let shared = state
        .store
        .get(&id)
        .ok_or_else(|| ApiError::UnknownSession(id.clone()))?;
    let board = lock_board(&shared);
    Ok(Json(BoardResponse::new(&board, None)))
}

#[instrument(skip(state))]
async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.remove(&id) {
        return Err(ApiError::UnknownSession(id));
    }
    info!(session_id = %id, "Game deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn make_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MakeMoveRequest>,
) -> Result<Json<BoardResponse>, ApiError> {
    let position = Position::from_row_col(req.row, req.col).inspect_err(|e| {
        warn!(session_id = %id, error = %e, "Rejected move");
    })?;

    let shared = state.store.board(&id);
    let mut board = lock_board(&shared);
    let report = play_turn(&mut board, position).inspect_err(|e| {
        warn!(session_id = %id, error = %e, "Rejected move");
    })?;

    Ok(Json(BoardResponse::new(&board, *report.ai_move())))
}

#[instrument(skip(state))]
async fn reset_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardResponse>, ApiError> {
    let shared = state.store.board(&id);
    let mut board = lock_board(&shared);
    let opening = new_game(&mut board, state.ai_moves_first)?;
    info!(session_id = %id, "Game reset");
    Ok(Json(BoardResponse::new(&board, opening)))
}
