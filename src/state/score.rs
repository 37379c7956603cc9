use super::GameState;
use crate::types::*;
use std::collections::HashMap;

impl GameState {
    /// Add the round tally onto the roster scores in one pass. Players
    /// missing from the tally get zero; tally entries for players that left
    /// mid-round are dropped with the round.
    pub(crate) fn apply_scores(&mut self, tally: &HashMap<PlayerId, u32>) {
        for player in &mut self.players {
            player.score += tally.get(&player.id).copied().unwrap_or(0);
        }
        tracing::info!(
            round = self.round.number,
            votes = tally.values().sum::<u32>(),
            "scores applied"
        );
    }

    /// Players ordered by score, highest first. Ties keep roster insertion
    /// order, so the result is a deterministic total order.
    pub fn ranked(&self) -> Vec<Player> {
        let mut ranked = self.players.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(names: &[&str]) -> GameState {
        let mut state = GameState::seeded(2);
        for name in names {
            state.add_player(name).unwrap();
        }
        state
    }

    #[test]
    fn test_apply_scores_adds_exact_deltas() {
        let mut state = game_with(&["Alice", "Bob"]);
        let alice = state.players()[0].id.clone();
        let bob = state.players()[1].id.clone();

        let tally = HashMap::from([(alice.clone(), 3), (bob.clone(), 1)]);
        state.apply_scores(&tally);
        state.apply_scores(&HashMap::from([(bob.clone(), 2)]));

        assert_eq!(state.player(&alice).unwrap().score, 3);
        assert_eq!(state.player(&bob).unwrap().score, 3);
    }

    #[test]
    fn test_apply_scores_sum_matches_tally_sum() {
        let mut state = game_with(&["Alice", "Bob", "Carol"]);
        let ids: Vec<PlayerId> = state.players().iter().map(|p| p.id.clone()).collect();

        let tally = HashMap::from([
            (ids[0].clone(), 2),
            (ids[1].clone(), 0),
            (ids[2].clone(), 5),
        ]);
        state.apply_scores(&tally);

        let score_sum: u32 = state.players().iter().map(|p| p.score).sum();
        assert_eq!(score_sum, tally.values().sum::<u32>());
    }

    #[test]
    fn test_apply_scores_ignores_departed_players() {
        let mut state = game_with(&["Alice", "Bob"]);
        let bob = state.players()[1].id.clone();

        let tally = HashMap::from([("ghost".to_string(), 4), (bob.clone(), 1)]);
        state.apply_scores(&tally);

        let score_sum: u32 = state.players().iter().map(|p| p.score).sum();
        assert_eq!(score_sum, 1);
    }

    #[test]
    fn test_ranked_breaks_ties_by_insertion_order() {
        let mut state = game_with(&["Alice", "Bob", "Carol"]);
        let bob = state.players()[1].id.clone();

        state.apply_scores(&HashMap::from([(bob.clone(), 2)]));
        let ranked = state.ranked();

        assert_eq!(ranked[0].name, "Bob");
        // Alice and Carol are tied at zero; roster order decides.
        assert_eq!(ranked[1].name, "Alice");
        assert_eq!(ranked[2].name, "Carol");
    }
}
