//! HTTP endpoints: thin plumbing between JSON bodies and the game engine.
//!
//! Handlers validate field presence, find the game, take its lock, and call
//! exactly one engine operation. All game rules live in [`crate::state`].

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{GameError, GameResult};
use crate::protocol::*;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/join", post(join_game))
        .route("/status", get(player_status))
        .route("/phrase", post(submit_phrase))
        .route("/image", post(submit_image))
        .route("/results", get(game_results))
        .route("/restart", post(restart))
        .with_state(state)
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = if self.is_internal() {
            // A missing prompt source means the lockstep barrier was
            // bypassed somewhere; surface it as a server fault.
            tracing::error!(error = %self, "game state invariant violated");
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Reject empty identifiers before they reach the engine
fn require(field: &'static str, value: &str) -> GameResult<()> {
    if value.is_empty() {
        return Err(GameError::MissingField(field));
    }
    Ok(())
}

async fn root() -> &'static str {
    "This is the Sketchophone API base URL. Please add an endpoint name to your request to get started."
}

async fn join_game(
    State(state): State<Arc<AppState>>,
    Json(req): Json<JoinRequest>,
) -> GameResult<StatusCode> {
    require("game", &req.game)?;
    require("username", &req.username)?;

    let game = state.get_or_create(&req.game).await;
    game.lock().await.join(&req.username)?;
    Ok(StatusCode::OK)
}

async fn player_status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatusQuery>,
) -> GameResult<Json<PlayerStatusView>> {
    require("game", &query.game)?;
    require("username", &query.username)?;

    let game = state
        .get_by_code(&query.game)
        .await
        .ok_or_else(|| GameError::UnknownGame(query.game.clone()))?;
    let view = game.lock().await.status(&query.username, query.full)?;
    Ok(Json(view))
}

async fn submit_phrase(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PhraseRequest>,
) -> GameResult<StatusCode> {
    require("game", &req.game)?;
    require("username", &req.username)?;
    require("phrase", &req.phrase)?;

    let game = state
        .get_by_code(&req.game)
        .await
        .ok_or_else(|| GameError::UnknownGame(req.game.clone()))?;
    game.lock().await.submit_phrase(&req.username, &req.phrase)?;
    Ok(StatusCode::OK)
}

async fn submit_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImageRequest>,
) -> GameResult<StatusCode> {
    require("game", &req.game)?;
    require("username", &req.username)?;
    require("image", &req.image)?;

    let game = state
        .get_by_code(&req.game)
        .await
        .ok_or_else(|| GameError::UnknownGame(req.game.clone()))?;
    game.lock().await.submit_image(&req.username, &req.image)?;
    Ok(StatusCode::OK)
}

async fn game_results(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResultsQuery>,
) -> GameResult<Json<Vec<SubmissionThread>>> {
    require("game", &query.game)?;

    let game = state
        .get_by_code(&query.game)
        .await
        .ok_or_else(|| GameError::UnknownGame(query.game.clone()))?;
    let threads = game.lock().await.results_threads()?;
    Ok(Json(threads))
}

/// Administrative wipe of every game in the registry
async fn restart(State(state): State<Arc<AppState>>) -> StatusCode {
    state.clear_all().await;
    StatusCode::OK
}
