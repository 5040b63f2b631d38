use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type GameCode = String;
pub type PlayerName = String;

/// What a player is expected to do next.
///
/// Every player in a game carries one of these; the lockstep barrier in
/// [`crate::state::Game`] keeps them synchronized across the roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    SubmitInitialPhrase,
    SubmitPhrase,
    SubmitImage,
    Wait,
    GameOver,
}

impl PlayerStatus {
    /// True while the game is still accepting new players without restriction.
    pub fn is_joinable(&self) -> bool {
        matches!(self, PlayerStatus::SubmitInitialPhrase)
    }
}

/// Actions a player can attempt against the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    SubmitPhrase,
    SubmitImage,
}

impl PlayerAction {
    /// Parse an action name as received from a caller. Unknown actions map to
    /// `None` and are never allowed.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "submitPhrase" => Some(PlayerAction::SubmitPhrase),
            "submitImage" => Some(PlayerAction::SubmitImage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerName,
    pub status: PlayerStatus,
    /// ISO timestamp of when the player joined
    pub joined_at: String,
}

impl Player {
    pub fn new(name: impl Into<PlayerName>) -> Self {
        Self {
            name: name.into(),
            status: PlayerStatus::SubmitInitialPhrase,
            joined_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A single phrase or image contribution. The kind is implied by which log
/// the submission lives in; `content` is an opaque string either way (image
/// payloads arrive as data URLs from the client).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub author: PlayerName,
    pub content: String,
    /// ISO timestamp of when the submission was received
    pub submitted_at: String,
}

impl Submission {
    pub fn new(author: impl Into<PlayerName>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&PlayerStatus::SubmitInitialPhrase).unwrap();
        assert_eq!(json, "\"SUBMIT_INITIAL_PHRASE\"");
        let json = serde_json::to_string(&PlayerStatus::GameOver).unwrap();
        assert_eq!(json, "\"GAME_OVER\"");
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(
            PlayerAction::parse("submitPhrase"),
            Some(PlayerAction::SubmitPhrase)
        );
        assert_eq!(
            PlayerAction::parse("submitImage"),
            Some(PlayerAction::SubmitImage)
        );
        assert_eq!(PlayerAction::parse("vote"), None);
        assert_eq!(PlayerAction::parse(""), None);
    }
}
