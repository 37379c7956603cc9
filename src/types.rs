use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque ID type for type safety
pub type PlayerId = String;

/// Themes carry no identity beyond their text.
pub type Theme = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Lobby,
    ThemeReveal,
    Submitting,
    Voting,
    RoundResults,
    Ended,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

/// One player's answer for the current round. Exactly one per player,
/// immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub player_id: PlayerId,
    pub song: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub theme: Option<Theme>,
    /// Roster order captured when the round started. Submission and voting
    /// cursors run over this list, not the live roster, so roster edits
    /// mid-round cannot shift whose turn it is.
    pub order: Vec<PlayerId>,
    pub submit_index: usize,
    pub submissions: Vec<Submission>,
    pub vote_index: usize,
    pub tally: HashMap<PlayerId, u32>,
}

impl Round {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            theme: None,
            order: Vec::new(),
            submit_index: 0,
            submissions: Vec::new(),
            vote_index: 0,
            tally: HashMap::new(),
        }
    }
}
