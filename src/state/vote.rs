use super::GameState;
use crate::error::{GameError, GameResult};
use crate::types::*;

impl GameState {
    /// Player whose turn it is to vote, from the round's roster snapshot
    pub fn current_voter(&self) -> Option<&PlayerId> {
        if self.phase != GamePhase::Voting {
            return None;
        }
        self.round.order.get(self.round.vote_index)
    }

    /// Submissions the current voter may pick from. Their own entry is
    /// excluded here so a self-vote is never even offered; the guard in
    /// [`GameState::vote`] is defense in depth.
    pub fn options_for_current_voter(&self) -> Vec<&Submission> {
        let voter = self.current_voter();
        self.round
            .submissions
            .iter()
            .filter(|s| Some(&s.player_id) != voter)
            .collect()
    }

    /// Count one vote for `target_id` and advance the voter cursor. After
    /// the last voter the tally is applied to the roster in one step and the
    /// round moves to RoundResults.
    pub fn vote(&mut self, target_id: &str) -> GameResult<()> {
        if self.phase != GamePhase::Voting {
            return Err(GameError::WrongPhase(self.phase));
        }
        let Some(voter_id) = self.round.order.get(self.round.vote_index) else {
            return Err(GameError::WrongPhase(self.phase));
        };
        if voter_id == target_id {
            return Err(GameError::SelfVote);
        }

        *self.round.tally.entry(target_id.to_string()).or_insert(0) += 1;
        self.round.vote_index += 1;

        if self.round.vote_index >= self.round.order.len() {
            let tally = self.round.tally.clone();
            self.apply_scores(&tally);
            self.phase = GamePhase::RoundResults;
            tracing::info!(round = self.round.number, "round complete");
        }
        Ok(())
    }

    /// Round tally for the results screen, most voted first, ties broken by
    /// round order so the output is stable.
    pub fn round_results(&self) -> Vec<(PlayerId, u32)> {
        let position = |id: &str| {
            self.round
                .order
                .iter()
                .position(|p| p == id)
                .unwrap_or(usize::MAX)
        };
        let mut results: Vec<(PlayerId, u32)> = self
            .round
            .tally
            .iter()
            .map(|(id, votes)| (id.clone(), *votes))
            .collect();
        results.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| position(&a.0).cmp(&position(&b.0))));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voting_game() -> GameState {
        let mut state = GameState::seeded(11);
        state.add_player("Alice").unwrap();
        state.add_player("Bob").unwrap();
        state.add_player("Carol").unwrap();
        state.start_round().unwrap();
        state.begin_submissions().unwrap();
        for song in ["a", "b", "c"] {
            state.submit(song).unwrap();
        }
        state
    }

    fn ids(state: &GameState) -> (PlayerId, PlayerId, PlayerId) {
        let players = state.players();
        (
            players[0].id.clone(),
            players[1].id.clone(),
            players[2].id.clone(),
        )
    }

    #[test]
    fn test_self_vote_is_rejected_without_side_effects() {
        let mut state = voting_game();
        let (alice, _, _) = ids(&state);

        assert_eq!(state.current_voter(), Some(&alice));
        assert_eq!(state.vote(&alice), Err(GameError::SelfVote));

        assert_eq!(state.round().vote_index, 0);
        assert!(state.round().tally.values().all(|&v| v == 0));
        assert_eq!(state.phase(), GamePhase::Voting);
    }

    #[test]
    fn test_options_exclude_own_submission() {
        let state = voting_game();
        let (alice, _, _) = ids(&state);

        let options = state.options_for_current_voter();
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|s| s.player_id != alice));
    }

    #[test]
    fn test_voting_ends_after_one_vote_per_player() {
        let mut state = voting_game();
        let (alice, bob, carol) = ids(&state);

        state.vote(&bob).unwrap();
        state.vote(&carol).unwrap();
        assert_eq!(state.phase(), GamePhase::Voting);
        state.vote(&alice).unwrap();

        assert_eq!(state.phase(), GamePhase::RoundResults);
        assert!(matches!(
            state.vote(&alice),
            Err(GameError::WrongPhase(GamePhase::RoundResults))
        ));
    }

    #[test]
    fn test_scores_applied_exactly_once_when_voting_closes() {
        let mut state = voting_game();
        let (_, bob, carol) = ids(&state);

        state.vote(&bob).unwrap();
        state.vote(&carol).unwrap();
        // No score movement until the last vote is in.
        assert!(state.players().iter().all(|p| p.score == 0));

        state.vote(&bob).unwrap();
        let total: u32 = state.players().iter().map(|p| p.score).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_round_results_sorted_by_votes() {
        let mut state = voting_game();
        let (alice, bob, carol) = ids(&state);

        state.vote(&bob).unwrap();
        state.vote(&carol).unwrap();
        state.vote(&bob).unwrap();

        let results = state.round_results();
        assert_eq!(results[0], (bob, 2));
        assert_eq!(results[1], (carol, 1));
        assert_eq!(results[2], (alice, 0));
    }
}
