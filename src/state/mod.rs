mod game;
mod roster;
mod submission;
mod thread;

pub use game::Game;
pub use roster::Roster;
pub use submission::SubmissionLog;

use crate::types::GameCode;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared application state: the registry mapping game codes to sessions.
///
/// The map is read-mostly after warm-up; each game sits behind its own
/// mutex so that join/submit/resync run atomically per game while distinct
/// games proceed concurrently.
#[derive(Clone)]
pub struct AppState {
    games: Arc<RwLock<HashMap<GameCode, Arc<Mutex<Game>>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Look up a game by code
    pub async fn get_by_code(&self, code: &str) -> Option<Arc<Mutex<Game>>> {
        self.games.read().await.get(code).cloned()
    }

    /// Look up a game, creating it on first reference to an unknown code
    pub async fn get_or_create(&self, code: &str) -> Arc<Mutex<Game>> {
        if let Some(game) = self.get_by_code(code).await {
            return game;
        }
        let mut games = self.games.write().await;
        // Re-check under the write lock; another caller may have raced us
        games
            .entry(code.to_string())
            .or_insert_with(|| {
                tracing::info!(game = code, "created new game");
                Arc::new(Mutex::new(Game::new(code)))
            })
            .clone()
    }

    pub async fn exists(&self, code: &str) -> bool {
        self.games.read().await.contains_key(code)
    }

    /// Administrative wipe of every game
    pub async fn clear_all(&self) {
        let mut games = self.games.write().await;
        let dropped = games.len();
        games.clear();
        tracing::info!(dropped, "cleared game registry");
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
