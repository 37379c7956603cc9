use super::GameState;
use crate::error::{GameError, GameResult};
use crate::types::*;

impl GameState {
    /// Whether the lobby can launch a round
    pub fn can_start(&self) -> bool {
        self.players.len() >= 2 && !self.pool.is_empty()
    }

    /// Lobby -> ThemeReveal. Requires at least two players and a non-empty
    /// pool; on failure the state stays in the lobby.
    pub fn start_round(&mut self) -> GameResult<()> {
        if self.phase != GamePhase::Lobby {
            return Err(GameError::WrongPhase(self.phase));
        }
        if !self.can_start() {
            return Err(GameError::InsufficientSetup);
        }
        self.begin_round(self.round.number)
    }

    /// Redraw the theme without leaving the reveal screen. Round number,
    /// submissions, and tally are untouched.
    pub fn skip_theme(&mut self) -> GameResult<()> {
        if self.phase != GamePhase::ThemeReveal {
            return Err(GameError::WrongPhase(self.phase));
        }
        let theme = self.picker.draw(&self.pool, &mut self.rng)?;
        tracing::debug!(round = self.round.number, %theme, "theme skipped");
        self.round.theme = Some(theme);
        Ok(())
    }

    /// ThemeReveal -> Submitting; any previous submission state is cleared.
    pub fn begin_submissions(&mut self) -> GameResult<()> {
        if self.phase != GamePhase::ThemeReveal {
            return Err(GameError::WrongPhase(self.phase));
        }
        self.round.submissions.clear();
        self.round.submit_index = 0;
        self.phase = GamePhase::Submitting;
        Ok(())
    }

    /// RoundResults -> ThemeReveal with the next round number and a freshly
    /// drawn theme.
    pub fn advance_round(&mut self) -> GameResult<()> {
        if self.phase != GamePhase::RoundResults {
            return Err(GameError::WrongPhase(self.phase));
        }
        self.begin_round(self.round.number + 1)
    }

    /// Operator decision to stop playing. Only offered on the reveal and
    /// results screens.
    pub fn end_game(&mut self) -> GameResult<()> {
        match self.phase {
            GamePhase::ThemeReveal | GamePhase::RoundResults => {
                self.phase = GamePhase::Ended;
                tracing::info!(rounds_played = self.round.number, "game ended");
                Ok(())
            }
            phase => Err(GameError::WrongPhase(phase)),
        }
    }

    /// Replace the round state wholesale and enter ThemeReveal.
    ///
    /// The theme is drawn before anything is mutated, so a failed draw
    /// (empty pool) leaves the previous phase and round intact. The roster
    /// order is snapshotted here and held fixed for the whole round.
    fn begin_round(&mut self, number: u32) -> GameResult<()> {
        let theme = self.picker.draw(&self.pool, &mut self.rng)?;
        self.round = Round {
            number,
            theme: Some(theme),
            order: self.players.iter().map(|p| p.id.clone()).collect(),
            submit_index: 0,
            submissions: Vec::new(),
            vote_index: 0,
            tally: Default::default(),
        };
        self.phase = GamePhase::ThemeReveal;
        tracing::info!(round = number, theme = ?self.round.theme, "round started");
        Ok(())
    }
}
