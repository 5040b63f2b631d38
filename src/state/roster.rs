use crate::error::{GameError, GameResult};
use crate::types::*;

/// Ordered list of players in join order.
///
/// Join order is the turn circle: it never changes once a player is in, and
/// it defines `next`/`previous` via wrap-around indexing. A single-player
/// roster is its own neighbor in both directions.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new player. Joining twice is a no-op; the existing entry
    /// keeps its position and status.
    pub fn join(&mut self, name: &str) {
        if !self.contains(name) {
            self.players.push(Player::new(name));
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Position of a player in the turn circle
    pub fn position(&self, name: &str) -> GameResult<usize> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    /// Player at a circle position, wrapping around
    pub fn at(&self, index: usize) -> &Player {
        &self.players[index % self.players.len()]
    }

    /// Circular successor in join order
    pub fn next(&self, name: &str) -> GameResult<&Player> {
        let idx = self.position(name)?;
        Ok(self.at(idx + 1))
    }

    /// Circular predecessor in join order
    pub fn previous(&self, name: &str) -> GameResult<&Player> {
        let idx = self.position(name)?;
        Ok(self.at(idx + self.players.len() - 1))
    }

    pub fn status_of(&self, name: &str) -> GameResult<PlayerStatus> {
        self.get(name)
            .map(|p| p.status)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    pub fn set_status(&mut self, name: &str, status: PlayerStatus) -> GameResult<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
        player.status = status;
        Ok(())
    }

    /// Flip every player to the same status (the lockstep transition)
    pub fn set_all_statuses(&mut self, status: PlayerStatus) {
        for player in &mut self.players {
            player.status = status;
        }
    }

    /// True when every player has reached the barrier
    pub fn all_waiting(&self) -> bool {
        self.players.iter().all(|p| p.status == PlayerStatus::Wait)
    }

    /// True while every player is still collecting their initial phrase
    pub fn all_joinable(&self) -> bool {
        self.players.iter().all(|p| p.status.is_joinable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(names: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for name in names {
            roster.join(name);
        }
        roster
    }

    #[test]
    fn test_join_preserves_order() {
        let roster = roster_of(&["Kirk", "Spock", "Bones"]);
        let names: Vec<_> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Kirk", "Spock", "Bones"]);
    }

    #[test]
    fn test_join_is_idempotent() {
        let mut roster = roster_of(&["Kirk", "Spock"]);
        roster.set_status("Kirk", PlayerStatus::Wait).unwrap();
        roster.join("Kirk");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.status_of("Kirk").unwrap(), PlayerStatus::Wait);
    }

    #[test]
    fn test_new_player_starts_on_initial_phrase() {
        let roster = roster_of(&["Kirk"]);
        assert_eq!(
            roster.status_of("Kirk").unwrap(),
            PlayerStatus::SubmitInitialPhrase
        );
    }

    #[test]
    fn test_neighbors_wrap_around() {
        let roster = roster_of(&["Kirk", "Spock", "Bones"]);
        assert_eq!(roster.next("Bones").unwrap().name, "Kirk");
        assert_eq!(roster.previous("Kirk").unwrap().name, "Bones");
        assert_eq!(roster.next("Kirk").unwrap().name, "Spock");
        assert_eq!(roster.previous("Spock").unwrap().name, "Kirk");
    }

    #[test]
    fn test_single_player_is_own_neighbor() {
        let roster = roster_of(&["Kirk"]);
        assert_eq!(roster.next("Kirk").unwrap().name, "Kirk");
        assert_eq!(roster.previous("Kirk").unwrap().name, "Kirk");
    }

    #[test]
    fn test_neighbors_are_inverse() {
        for size in 1..=5 {
            let names: Vec<String> = (0..size).map(|i| format!("p{i}")).collect();
            let name_refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
            let roster = roster_of(&name_refs);
            for name in &names {
                let next = roster.next(name).unwrap().name.clone();
                assert_eq!(&roster.previous(&next).unwrap().name, name);
                let prev = roster.previous(name).unwrap().name.clone();
                assert_eq!(&roster.next(&prev).unwrap().name, name);
            }
        }
    }

    #[test]
    fn test_unknown_player_errors() {
        let roster = roster_of(&["Kirk"]);
        assert_eq!(
            roster.next("Khan").unwrap_err(),
            GameError::UnknownPlayer("Khan".to_string())
        );
        assert_eq!(
            roster.previous("Khan").unwrap_err(),
            GameError::UnknownPlayer("Khan".to_string())
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let roster = roster_of(&["Kirk"]);
        assert!(roster.contains("Kirk"));
        assert!(!roster.contains("kirk"));
    }
}
