//! Single-player theme browsing: no roster, no scores, just drawing themes
//! with undo and a short history.

use crate::error::GameResult;
use crate::picker::ThemePicker;
use crate::types::Theme;
use rand::Rng;

/// Most recent themes kept for display
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct SoloSession {
    picker: ThemePicker,
    current: Option<Theme>,
    undo_stack: Vec<Theme>,
    /// Newest first, at most [`HISTORY_LIMIT`] entries
    history: Vec<Theme>,
}

impl SoloSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn history(&self) -> &[Theme] {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Forget draw bookkeeping. Required after any pool change.
    pub fn reset_pool(&mut self) {
        self.picker.reset();
    }

    /// Draw the next theme. On an empty pool the session is left unchanged.
    pub fn next<R: Rng>(&mut self, pool: &[Theme], rng: &mut R) -> GameResult<()> {
        let theme = self.picker.draw(pool, rng)?;
        if let Some(prev) = self.current.take() {
            self.undo_stack.push(prev);
        }
        self.history.insert(0, theme.clone());
        self.history.truncate(HISTORY_LIMIT);
        self.current = Some(theme);
        Ok(())
    }

    /// Step back to the previously shown theme. The head of the history is
    /// corrected rather than appended to, keeping its length stable. No-op
    /// when there is nothing to undo.
    pub fn undo(&mut self) {
        let Some(prev) = self.undo_stack.pop() else {
            return;
        };
        if let Some(head) = self.history.first_mut() {
            *head = prev.clone();
        }
        self.current = Some(prev);
    }
}
