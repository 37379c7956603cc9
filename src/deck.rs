//! Theme decks and pool computation.
//!
//! Built-in decks are fixed at compile time; the "Custom" deck is filled by
//! the players at runtime and is append-only. The active pool is the merge
//! of all currently selected decks.

use crate::error::{GameError, GameResult};
use crate::types::Theme;
use std::collections::{HashMap, HashSet};

/// Name of the user-editable deck
pub const CUSTOM_DECK: &str = "Custom";

/// Merge the selected decks into a single pool.
///
/// Deduplication is keyed on (deck name, theme text): a theme repeated within
/// one deck is admitted once, while the same text under two different
/// selected decks is kept for each deck. Blank entries are dropped. Output
/// order follows `selected`, then deck order, so identical inputs always
/// yield the same pool.
pub fn merge_pool(
    selected: &[String],
    custom: &[String],
    catalog: &HashMap<String, Vec<String>>,
) -> Vec<Theme> {
    let mut pool = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for deck in selected {
        let themes = if deck == CUSTOM_DECK {
            custom
        } else {
            match catalog.get(deck) {
                Some(themes) => themes.as_slice(),
                None => continue,
            }
        };

        for theme in themes {
            if theme.trim().is_empty() {
                continue;
            }
            if seen.insert((deck.as_str(), theme.as_str())) {
                pool.push(theme.clone());
            }
        }
    }

    pool
}

/// The built-in decks plus the runtime "Custom" deck.
#[derive(Debug, Clone)]
pub struct DeckCatalog {
    builtin: HashMap<String, Vec<String>>,
    /// Display order of the built-in decks (HashMap iteration order is not
    /// stable enough for a menu)
    builtin_order: Vec<String>,
    custom: Vec<String>,
}

impl DeckCatalog {
    pub fn builtin() -> Self {
        let decks: Vec<(&str, Vec<&str>)> = vec![
            (
                "Classic",
                vec![
                    "A song that defines your childhood",
                    "A song you know every word to",
                    "A song for a road trip",
                    "A song that gets everyone dancing",
                    "A song you'd play at your own wedding",
                    "A song for a rainy day",
                    "A song that makes you cry",
                    "A song stuck in your head lately",
                    "A song for singing in the shower",
                    "The best song to wake up to",
                ],
            ),
            (
                "Nostalgia",
                vec![
                    "A song that marked your school days",
                    "A song from family barbecues",
                    "A song from your first MP3 player",
                    "A song with early-internet energy",
                ],
            ),
            (
                "Memes",
                vec![
                    "A song nobody would expect you to like",
                    "A song that became a meme",
                    "A cheesy song that is secretly perfect",
                    "A song for a dramatic entrance",
                ],
            ),
            (
                "Anime & Geek",
                vec![
                    "An anime opening that gives you chills",
                    "A game soundtrack that stuck with you",
                    "A movie or series theme fit for heroes",
                    "A song you would put in a boss fight",
                ],
            ),
            (
                "Romance",
                vec![
                    "A song to propose with",
                    "A song for slow dancing",
                    "A song that reminds you of a crush",
                    "A song for a late night date",
                ],
            ),
        ];

        let builtin_order: Vec<String> = decks.iter().map(|(name, _)| name.to_string()).collect();
        let builtin = decks
            .into_iter()
            .map(|(name, themes)| {
                (
                    name.to_string(),
                    themes.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();

        Self {
            builtin,
            builtin_order,
            custom: Vec::new(),
        }
    }

    /// All selectable deck names, built-ins first, "Custom" last
    pub fn deck_names(&self) -> Vec<String> {
        let mut names = self.builtin_order.clone();
        names.push(CUSTOM_DECK.to_string());
        names
    }

    pub fn is_known_deck(&self, name: &str) -> bool {
        name == CUSTOM_DECK || self.builtin.contains_key(name)
    }

    pub fn custom_themes(&self) -> &[String] {
        &self.custom
    }

    /// Append a theme to the "Custom" deck
    pub fn add_custom(&mut self, theme: &str) -> GameResult<()> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(GameError::Validation("theme cannot be empty".into()));
        }
        self.custom.push(theme.to_string());
        Ok(())
    }

    /// Pool for the given deck selection, in selection order
    pub fn pool_for(&self, selected: &[String]) -> Vec<Theme> {
        merge_pool(selected, &self.custom, &self.builtin)
    }
}
