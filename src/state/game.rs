use crate::error::{GameError, GameResult};
use crate::protocol::PlayerStatusView;
use crate::state::roster::Roster;
use crate::state::submission::SubmissionLog;
use crate::types::*;

/// One game session: roster, submission logs, and the status state machine.
///
/// All operations are synchronous and complete in time proportional to the
/// player count. Callers serialize access per game (see `AppState`); two
/// games with different codes never share state.
#[derive(Debug, Clone)]
pub struct Game {
    code: GameCode,
    pub(crate) roster: Roster,
    pub(crate) log: SubmissionLog,
}

impl Game {
    pub fn new(code: impl Into<GameCode>) -> Self {
        Self {
            code: code.into(),
            roster: Roster::new(),
            log: SubmissionLog::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.roster.contains(name)
    }

    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Joining is only allowed before the first phrase round closes, and
    /// again once the game is over (so a finished table can seed a rematch).
    pub fn too_late_to_join(&self) -> bool {
        !self.roster.is_empty() && !self.roster.all_joinable() && !self.is_over()
    }

    /// A round trip around the table needs at least two players
    pub fn too_early_to_start(&self) -> bool {
        self.roster.len() < 2
    }

    /// Add a player to the turn circle. Idempotent for names already in the
    /// roster; rejected while a game is in progress.
    pub fn join(&mut self, name: &str) -> GameResult<()> {
        if self.too_late_to_join() {
            return Err(GameError::GameInProgress);
        }
        self.roster.join(name);
        tracing::debug!(game = %self.code, player = name, "player joined");
        Ok(())
    }

    /// 1-indexed round counter: odd rounds collect phrases, even rounds
    /// collect images.
    ///
    /// Counts use the least-submitted player so that stragglers gate the
    /// whole table at the current round.
    pub fn phase_number(&self) -> usize {
        let player_count = self.roster.len();
        if self.log.total_phrases() < player_count {
            return 1;
        }
        if self.log.total_images() < player_count {
            return 2;
        }
        let authors = || self.roster.iter().map(|p| p.name.as_str());
        1 + self.log.min_image_count(authors()) + self.log.min_phrase_count(authors())
    }

    /// The game ends once every player has contributed one submission per
    /// round for a full rotation: phrase count + image count == player count.
    pub fn is_over(&self) -> bool {
        !self.roster.is_empty()
            && self.roster.iter().all(|p| {
                self.log.phrase_count_for(&p.name) + self.log.image_count_for(&p.name)
                    == self.roster.len()
            })
    }

    /// Whether a player may perform an action in their current status.
    /// Unknown players can do nothing.
    pub fn is_action_allowed(&self, name: &str, action: PlayerAction) -> bool {
        let Some(player) = self.roster.get(name) else {
            return false;
        };
        match action {
            PlayerAction::SubmitPhrase => matches!(
                player.status,
                PlayerStatus::SubmitInitialPhrase | PlayerStatus::SubmitPhrase
            ),
            PlayerAction::SubmitImage => player.status == PlayerStatus::SubmitImage,
        }
    }

    /// Record a phrase, park the player at the barrier, and advance the
    /// round if they were the last straggler.
    pub fn submit_phrase(&mut self, name: &str, text: &str) -> GameResult<()> {
        self.roster.status_of(name)?;
        if !self.is_action_allowed(name, PlayerAction::SubmitPhrase) {
            return Err(GameError::not_allowed(name, "submit a phrase right now"));
        }
        self.log.append_phrase(name, text);
        self.roster.set_status(name, PlayerStatus::Wait)?;
        self.resync();
        Ok(())
    }

    /// Symmetric to [`Game::submit_phrase`], gated on `SUBMIT_IMAGE`
    pub fn submit_image(&mut self, name: &str, image: &str) -> GameResult<()> {
        self.roster.status_of(name)?;
        if !self.is_action_allowed(name, PlayerAction::SubmitImage) {
            return Err(GameError::not_allowed(name, "submit an image right now"));
        }
        self.log.append_image(name, image);
        self.roster.set_status(name, PlayerStatus::Wait)?;
        self.resync();
        Ok(())
    }

    /// The lockstep barrier: once every player has reached `WAIT`, flip the
    /// whole roster to the next round's status in one step. No player
    /// advances until the last straggler has submitted.
    fn resync(&mut self) {
        if !self.roster.all_waiting() {
            return;
        }
        let next_status = if self.is_over() {
            PlayerStatus::GameOver
        } else if self.phase_number() % 2 == 1 {
            PlayerStatus::SubmitPhrase
        } else {
            PlayerStatus::SubmitImage
        };
        self.roster.set_all_statuses(next_status);
        tracing::info!(
            game = %self.code,
            phase = self.phase_number(),
            status = ?next_status,
            "round complete, roster advanced"
        );
    }

    /// The phrase this player is about to illustrate: the latest phrase from
    /// their previous neighbor in the circle.
    pub fn phrase_prompt(&self, name: &str) -> GameResult<&Submission> {
        let source = self.roster.previous(name)?.name.clone();
        self.log.last_phrase_by(&source)
    }

    /// The image this player is about to caption, from their previous neighbor
    pub fn image_prompt(&self, name: &str) -> GameResult<&Submission> {
        let source = self.roster.previous(name)?.name.clone();
        self.log.last_image_by(&source)
    }

    /// Assemble a player's status view. With `full_detail`, attaches the
    /// prompt appropriate for the current status plus both neighbor names.
    pub fn status(&self, name: &str, full_detail: bool) -> GameResult<PlayerStatusView> {
        let status = self.roster.status_of(name)?;
        if !full_detail {
            return Ok(PlayerStatusView::bare(status));
        }

        let prompt = match status {
            PlayerStatus::SubmitImage => Some(self.phrase_prompt(name)?.content.clone()),
            PlayerStatus::SubmitPhrase => Some(self.image_prompt(name)?.content.clone()),
            _ => None,
        };

        Ok(PlayerStatusView {
            description: status,
            prompt,
            previous_player_username: Some(self.roster.previous(name)?.name.clone()),
            next_player_username: Some(self.roster.next(name)?.name.clone()),
        })
    }
}
