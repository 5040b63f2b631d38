//! JSON request and response bodies for the HTTP layer.
//!
//! Field names match the wire format the web client already speaks
//! (`previousPlayerUsername` etc.), so views rename to camelCase and omit
//! optional fields entirely when absent.

use crate::types::PlayerStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct JoinRequest {
    pub game: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhraseRequest {
    pub game: String,
    pub username: String,
    pub phrase: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRequest {
    pub game: String,
    pub username: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub game: String,
    pub username: String,
    /// When false, return only the status description
    #[serde(default = "default_full")]
    pub full: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultsQuery {
    pub game: String,
}

fn default_full() -> bool {
    true
}

/// A player's view of where the game stands. `prompt` is present exactly
/// when the status calls for a response (the previous neighbor's phrase for
/// `SUBMIT_IMAGE`, their image for `SUBMIT_PHRASE`); neighbor names are
/// attached unless the caller asked for the bare status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatusView {
    pub description: PlayerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_player_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_player_username: Option<String>,
}

impl PlayerStatusView {
    pub fn bare(description: PlayerStatus) -> Self {
        Self {
            description,
            prompt: None,
            previous_player_username: None,
            next_player_username: None,
        }
    }
}

/// One originator's reconstructed chain, in presentation order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionThread {
    pub originator: String,
    pub submissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
