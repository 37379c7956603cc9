//! Serializable snapshot of the engine state.
//!
//! Read-only: front-ends render it (the CLI prints it as JSON); nothing is
//! restored from it, since persistence is out of scope for the engine.

use super::GameState;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Schema version for the snapshot format
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub schema_version: u32,
    /// Snapshot timestamp (ISO8601)
    pub exported_at: String,
    pub phase: GamePhase,
    pub round: Round,
    pub players: Vec<Player>,
    pub selected_decks: Vec<String>,
    pub custom_themes: Vec<String>,
    pub pool_size: usize,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            exported_at: chrono::Utc::now().to_rfc3339(),
            phase: self.phase,
            round: self.round.clone(),
            players: self.players.clone(),
            selected_decks: self.selected_decks.clone(),
            custom_themes: self.catalog.custom_themes().to_vec(),
            pool_size: self.pool.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_engine_state() {
        let mut state = GameState::seeded(1);
        state.add_player("Alice").unwrap();
        state.add_player("Bob").unwrap();
        state.start_round().unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(snapshot.phase, GamePhase::ThemeReveal);
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.pool_size, state.pool().len());
        assert!(snapshot.round.theme.is_some());
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let state = GameState::seeded(1);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.phase, GamePhase::Lobby);
        assert_eq!(parsed.selected_decks, ["Classic"]);
    }
}
