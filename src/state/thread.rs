use crate::error::{GameError, GameResult};
use crate::protocol::SubmissionThread;
use crate::state::game::Game;

impl Game {
    /// Reconstruct every originator's "broken telephone" chain from the
    /// submission logs of a finished game.
    ///
    /// For an originator at circle position `o`, step `i` (1-based) was
    /// contributed by the player at `(o + i) mod P`: their image at sequence
    /// index `i/2` when `i` is odd, their phrase at `i/2` when `i` is even.
    /// Step 0 is the originator's own first phrase. Threads are returned in
    /// join order and the walk is read-only, so repeated calls yield
    /// identical output.
    pub fn results_threads(&self) -> GameResult<Vec<SubmissionThread>> {
        if !self.is_over() {
            return Err(GameError::not_allowed(
                self.code(),
                "reveal results before the game is over",
            ));
        }

        (0..self.roster.len())
            .map(|index| {
                Ok(SubmissionThread {
                    originator: self.roster.at(index).name.clone(),
                    submissions: self.thread_for(index)?,
                })
            })
            .collect()
    }

    fn thread_for(&self, originator_index: usize) -> GameResult<Vec<String>> {
        let originator = &self.roster.at(originator_index).name;
        let mut chain = vec![self.log.phrase_at(originator, 0)?.content.clone()];

        for step in 1..self.roster.len() {
            let contributor = &self.roster.at(originator_index + step).name;
            let submission = if step % 2 == 0 {
                self.log.phrase_at(contributor, step / 2)?
            } else {
                self.log.image_at(contributor, step / 2)?
            };
            chain.push(submission.content.clone());
        }

        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_two_player_game() -> Game {
        let mut game = Game::new("TEST");
        game.join("Kirk").unwrap();
        game.join("Spock").unwrap();
        game.submit_phrase("Kirk", "kirk phrase").unwrap();
        game.submit_phrase("Spock", "spock phrase").unwrap();
        game.submit_image("Kirk", "kirk image").unwrap();
        game.submit_image("Spock", "spock image").unwrap();
        game
    }

    #[test]
    fn test_results_rejected_before_game_over() {
        let mut game = Game::new("TEST");
        assert!(game.results_threads().is_err());

        game.join("Kirk").unwrap();
        game.join("Spock").unwrap();
        game.submit_phrase("Kirk", "a phrase").unwrap();
        let err = game.results_threads().unwrap_err();
        assert!(matches!(err, GameError::ActionNotAllowed { .. }));
    }

    #[test]
    fn test_two_player_threads() {
        let game = finished_two_player_game();
        let threads = game.results_threads().unwrap();

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].originator, "Kirk");
        assert_eq!(threads[0].submissions, ["kirk phrase", "spock image"]);
        assert_eq!(threads[1].originator, "Spock");
        assert_eq!(threads[1].submissions, ["spock phrase", "kirk image"]);
    }

    #[test]
    fn test_three_player_threads() {
        let mut game = Game::new("TEST");
        for name in ["Kirk", "Spock", "Bones"] {
            game.join(name).unwrap();
        }
        game.submit_phrase("Kirk", "kirk phrase").unwrap();
        game.submit_phrase("Spock", "spock phrase").unwrap();
        game.submit_phrase("Bones", "bones phrase").unwrap();
        game.submit_image("Kirk", "kirk image").unwrap();
        game.submit_image("Spock", "spock image").unwrap();
        game.submit_image("Bones", "bones image").unwrap();
        game.submit_phrase("Spock", "spock guess").unwrap();
        game.submit_phrase("Bones", "bones guess").unwrap();
        game.submit_phrase("Kirk", "kirk guess").unwrap();

        let threads = game.results_threads().unwrap();
        assert_eq!(threads.len(), 3);

        // Kirk's phrase was drawn by Spock, then captioned by Bones
        assert_eq!(threads[0].originator, "Kirk");
        assert_eq!(
            threads[0].submissions,
            ["kirk phrase", "spock image", "bones guess"]
        );
        assert_eq!(threads[1].originator, "Spock");
        assert_eq!(
            threads[1].submissions,
            ["spock phrase", "bones image", "kirk guess"]
        );
        assert_eq!(threads[2].originator, "Bones");
        assert_eq!(
            threads[2].submissions,
            ["bones phrase", "kirk image", "spock guess"]
        );
    }

    #[test]
    fn test_results_are_idempotent() {
        let game = finished_two_player_game();
        let first = game.results_threads().unwrap();
        let second = game.results_threads().unwrap();
        assert_eq!(first, second);
    }
}
