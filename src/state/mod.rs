mod roster;
mod round;
mod score;
mod submission;
mod vote;

pub mod export;

use crate::deck::{DeckCatalog, CUSTOM_DECK};
use crate::error::{GameError, GameResult};
use crate::picker::ThemePicker;
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The full engine state for one local multiplayer session.
///
/// Everything is synchronous and owned by this struct; front-ends read
/// snapshots through the accessors and mutate only through the operations.
/// Each operation either completes or fails without partial effect.
pub struct GameState {
    pub(crate) catalog: DeckCatalog,
    pub(crate) selected_decks: Vec<String>,
    pub(crate) phase: GamePhase,
    pub(crate) players: Vec<Player>,
    pub(crate) round: Round,
    pub(crate) pool: Vec<Theme>,
    pub(crate) picker: ThemePicker,
    pub(crate) rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic state for tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut state = Self {
            catalog: DeckCatalog::builtin(),
            selected_decks: vec!["Classic".to_string()],
            phase: GamePhase::Lobby,
            players: Vec::new(),
            round: Round::new(1),
            pool: Vec::new(),
            picker: ThemePicker::new(),
            rng,
        };
        state.refresh_pool();
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn theme(&self) -> Option<&str> {
        self.round.theme.as_deref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn pool(&self) -> &[Theme] {
        &self.pool
    }

    pub fn catalog(&self) -> &DeckCatalog {
        &self.catalog
    }

    pub fn selected_decks(&self) -> &[String] {
        &self.selected_decks
    }

    pub fn is_deck_selected(&self, name: &str) -> bool {
        self.selected_decks.iter().any(|d| d == name)
    }

    /// Recompute the pool from the current deck selection.
    ///
    /// The picker's used set holds indices into the previous pool, which are
    /// meaningless after any pool change, so it is always cleared here.
    pub(crate) fn refresh_pool(&mut self) {
        self.pool = self.catalog.pool_for(&self.selected_decks);
        self.picker.reset();
    }

    /// Select or deselect a deck
    pub fn toggle_deck(&mut self, name: &str) -> GameResult<()> {
        if !self.catalog.is_known_deck(name) {
            return Err(GameError::Validation(format!("no deck named \"{name}\"")));
        }
        if let Some(pos) = self.selected_decks.iter().position(|d| d == name) {
            self.selected_decks.remove(pos);
        } else {
            self.selected_decks.push(name.to_string());
        }
        self.refresh_pool();
        tracing::debug!(deck = name, pool_size = self.pool.len(), "deck selection changed");
        Ok(())
    }

    /// Append a theme to the "Custom" deck
    pub fn add_custom_theme(&mut self, theme: &str) -> GameResult<()> {
        self.catalog.add_custom(theme)?;
        if self.is_deck_selected(CUSTOM_DECK) {
            self.refresh_pool();
        }
        Ok(())
    }

    /// Reset to a fresh lobby: players, scores, and round state are cleared,
    /// deck selection and custom themes are kept.
    pub fn start_lobby(&mut self) {
        self.players.clear();
        self.round = Round::new(1);
        self.phase = GamePhase::Lobby;
        tracing::info!("lobby opened");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
