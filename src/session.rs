//! Board storage for concurrent games.
//!
//! Each session owns an independent [`Board`] behind its own mutex. A turn
//! holds that lock from the human's move through the engine's reply, so at
//! most one search runs per board while other sessions proceed freely.

use perfect_tictactoe::Board;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A board shared between requests of one session.
pub type SharedBoard = Arc<Mutex<Board>>;

/// Where the collaborator keeps boards between turns.
///
/// The engine itself is stateless; implementors own every board.
pub trait BoardStore: Send + Sync {
    /// Returns the session's board, creating an empty one on first use.
    fn board(&self, id: &str) -> SharedBoard;

    /// Returns the session's board if the session exists.
    fn get(&self, id: &str) -> Option<SharedBoard>;

    /// Forgets a session. Returns whether it existed.
    fn remove(&self, id: &str) -> bool;

    /// Lists all active session IDs.
    fn session_ids(&self) -> Vec<SessionId>;
}

/// Locks a shared board, recovering the data if a previous holder panicked.
///
/// A panicking turn cannot leave a half-written board: every write is a
/// single `apply_move`, and search placements are undone on unwind.
pub fn lock_board(board: &SharedBoard) -> MutexGuard<'_, Board> {
    board.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory [`BoardStore`].
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, SharedBoard>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, SharedBoard>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BoardStore for SessionManager {
    #[instrument(skip(self))]
    fn board(&self, id: &str) -> SharedBoard {
        let mut sessions = self.sessions();
        let board = sessions.entry(id.to_string()).or_insert_with(|| {
            info!(session_id = id, "Created new session");
            Arc::new(Mutex::new(Board::new()))
        });
        Arc::clone(board)
    }

    #[instrument(skip(self))]
    fn get(&self, id: &str) -> Option<SharedBoard> {
        self.sessions().get(id).map(Arc::clone)
    }

    #[instrument(skip(self))]
    fn remove(&self, id: &str) -> bool {
        let removed = self.sessions().remove(id).is_some();
        debug!(session_id = id, removed, "Session removed");
        removed
    }

    #[instrument(skip(self))]
    fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}
