/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur during game operations.
///
/// Every operation either mutates and succeeds or rejects without mutation;
/// there are no partial failures and no retries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No game with code '{0}'")]
    UnknownGame(String),

    #[error("No player named '{0}' in this game")]
    UnknownPlayer(String),

    #[error("Cannot join a game in progress.")]
    GameInProgress,

    #[error("'{player}' may not {action}")]
    ActionNotAllowed { player: String, action: String },

    /// A prompt or thread lookup found no source submission. Under the
    /// lockstep barrier this cannot happen for a well-formed game, so it
    /// signals internal state corruption rather than caller error.
    #[error("No submission available from '{0}'")]
    NoSubmission(String),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
}

impl GameError {
    pub fn not_allowed(player: impl Into<String>, action: impl Into<String>) -> Self {
        GameError::ActionNotAllowed {
            player: player.into(),
            action: action.into(),
        }
    }

    /// True for faults that indicate a broken invariant rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, GameError::NoSubmission(_))
    }
}
