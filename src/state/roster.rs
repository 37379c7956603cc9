use super::GameState;
use crate::error::{GameError, GameResult};
use crate::types::*;

impl GameState {
    /// Add a player to the roster.
    ///
    /// Names are trimmed and must be unique case-insensitively. Scores start
    /// at zero. Returns the new player's id.
    pub fn add_player(&mut self, name: &str) -> GameResult<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::Validation("player name cannot be empty".into()));
        }
        if self
            .players
            .iter()
            .any(|p| p.name.to_lowercase() == name.to_lowercase())
        {
            return Err(GameError::Validation(format!(
                "\"{name}\" is already in the game"
            )));
        }

        let player = Player {
            id: ulid::Ulid::new().to_string(),
            name: name.to_string(),
            score: 0,
        };
        let id = player.id.clone();
        tracing::info!(player = %player.name, "player joined");
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player. No-op if the id is unknown. An active round keeps
    /// its roster snapshot, so removal never shifts the current cursors.
    pub fn remove_player(&mut self, id: &str) {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() < before {
            tracing::info!(player_id = id, "player removed");
        }
    }

    /// Display name for an id, with a fallback for players that left
    /// mid-round.
    pub fn player_name(&self, id: &str) -> &str {
        self.players
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_player_trims_name() {
        let mut state = GameState::seeded(1);
        let id = state.add_player("  Alice  ").unwrap();
        assert_eq!(state.player(&id).unwrap().name, "Alice");
        assert_eq!(state.player(&id).unwrap().score, 0);
    }

    #[test]
    fn test_add_player_rejects_empty_name() {
        let mut state = GameState::seeded(1);
        assert!(matches!(
            state.add_player("   "),
            Err(GameError::Validation(_))
        ));
        assert!(state.players().is_empty());
    }

    #[test]
    fn test_add_player_rejects_case_insensitive_duplicate() {
        let mut state = GameState::seeded(1);
        state.add_player("bob").unwrap();

        assert!(matches!(
            state.add_player("Bob"),
            Err(GameError::Validation(_))
        ));
        assert_eq!(state.players().len(), 1);
    }

    #[test]
    fn test_remove_player_is_noop_for_unknown_id() {
        let mut state = GameState::seeded(1);
        state.add_player("Alice").unwrap();
        state.remove_player("nope");
        assert_eq!(state.players().len(), 1);
    }

    #[test]
    fn test_player_name_falls_back_for_unknown_id() {
        let state = GameState::seeded(1);
        assert_eq!(state.player_name("ghost"), "?");
    }
}
