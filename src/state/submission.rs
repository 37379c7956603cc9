use super::GameState;
use crate::error::{GameError, GameResult};
use crate::types::*;

impl GameState {
    /// Player whose turn it is to submit, from the round's roster snapshot
    pub fn current_submitter(&self) -> Option<&PlayerId> {
        if self.phase != GamePhase::Submitting {
            return None;
        }
        self.round.order.get(self.round.submit_index)
    }

    /// Record the current player's song and advance the cursor. When the
    /// last player submits, voting opens with a zeroed tally.
    ///
    /// A second submit for the same player is a silent no-op; it indicates a
    /// double-tap in the front-end, not a rule violation.
    pub fn submit(&mut self, song: &str) -> GameResult<()> {
        if self.phase != GamePhase::Submitting {
            return Err(GameError::WrongPhase(self.phase));
        }
        let song = song.trim();
        if song.is_empty() {
            return Err(GameError::Validation("song cannot be empty".into()));
        }
        let Some(player_id) = self.round.order.get(self.round.submit_index).cloned() else {
            return Err(GameError::WrongPhase(self.phase));
        };

        if self.round.submissions.iter().any(|s| s.player_id == player_id) {
            tracing::debug!(%player_id, "duplicate submission ignored");
            return Ok(());
        }

        self.round.submissions.push(Submission {
            player_id,
            song: song.to_string(),
        });
        self.round.submit_index += 1;

        if self.round.submit_index >= self.round.order.len() {
            self.open_voting();
        }
        Ok(())
    }

    /// Submitting -> Voting: zero the tally for every current roster member
    /// and reset the voter cursor.
    fn open_voting(&mut self) {
        self.round.tally = self.players.iter().map(|p| (p.id.clone(), 0)).collect();
        self.round.vote_index = 0;
        self.phase = GamePhase::Voting;
        tracing::info!(
            round = self.round.number,
            submissions = self.round.submissions.len(),
            "voting open"
        );
    }
}
