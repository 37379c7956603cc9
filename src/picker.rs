//! Repetition-avoiding theme drawing.

use crate::error::{GameError, GameResult};
use crate::types::Theme;
use rand::Rng;
use std::collections::HashSet;

/// Resample budget before a repeat is accepted instead of looping forever
const MAX_RESAMPLES: usize = 1000;

/// Draws themes from a pool, avoiding repeats until every theme was shown.
///
/// The used set holds indices into the pool the picker was last drawing
/// from, so it is only meaningful for that exact pool. Callers must call
/// [`ThemePicker::reset`] whenever the pool contents change.
#[derive(Debug, Clone, Default)]
pub struct ThemePicker {
    used: HashSet<usize>,
}

impl ThemePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget which themes were drawn. Required after any pool change.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Draw one theme.
    ///
    /// Once every index has been drawn the used set is cleared before
    /// sampling, so a single-theme pool repeats immediately. Resampling on an
    /// already-used index is bounded; after [`MAX_RESAMPLES`] tries the last
    /// sample is accepted even if it repeats.
    pub fn draw<R: Rng>(&mut self, pool: &[Theme], rng: &mut R) -> GameResult<Theme> {
        if pool.is_empty() {
            return Err(GameError::EmptyPool);
        }

        if self.used.len() >= pool.len() {
            tracing::debug!(pool_size = pool.len(), "theme pool exhausted, resetting");
            self.used.clear();
        }

        let mut idx = rng.random_range(0..pool.len());
        let mut tries = 0;
        while self.used.contains(&idx) && tries < MAX_RESAMPLES {
            idx = rng.random_range(0..pool.len());
            tries += 1;
        }

        self.used.insert(idx);
        Ok(pool[idx].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool_of(n: usize) -> Vec<Theme> {
        (0..n).map(|i| format!("theme-{i}")).collect()
    }

    #[test]
    fn test_draw_empty_pool_fails() {
        let mut picker = ThemePicker::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(picker.draw(&[], &mut rng), Err(GameError::EmptyPool));
    }

    #[test]
    fn test_no_repeats_until_pool_exhausted() {
        let pool = pool_of(8);
        let mut picker = ThemePicker::new();
        let mut rng = StdRng::seed_from_u64(42);

        let mut drawn = HashSet::new();
        for _ in 0..pool.len() {
            let theme = picker.draw(&pool, &mut rng).unwrap();
            assert!(drawn.insert(theme), "theme repeated before exhaustion");
        }
        assert_eq!(picker.used_count(), pool.len());
    }

    #[test]
    fn test_exhausted_pool_resets_before_sampling() {
        let pool = pool_of(3);
        let mut picker = ThemePicker::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..pool.len() {
            picker.draw(&pool, &mut rng).unwrap();
        }
        assert_eq!(picker.used_count(), pool.len());

        // The (N+1)-th draw starts a fresh cycle.
        picker.draw(&pool, &mut rng).unwrap();
        assert_eq!(picker.used_count(), 1);
    }

    #[test]
    fn test_single_theme_pool_repeats_immediately() {
        let pool = vec!["only".to_string()];
        let mut picker = ThemePicker::new();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(picker.draw(&pool, &mut rng).unwrap(), "only");
        assert_eq!(picker.draw(&pool, &mut rng).unwrap(), "only");
    }

    #[test]
    fn test_reset_makes_every_theme_eligible_again() {
        let pool = pool_of(4);
        let mut picker = ThemePicker::new();
        let mut rng = StdRng::seed_from_u64(9);

        picker.draw(&pool, &mut rng).unwrap();
        picker.draw(&pool, &mut rng).unwrap();
        picker.reset();
        assert_eq!(picker.used_count(), 0);
    }
}
