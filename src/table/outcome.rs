use rand::Rng;
use rand::rngs::ThreadRng;

use super::dealer::DealtRound;
use super::errors::TableError;
use super::game_state::SessionState;

/// How a round of blackjack ended for the player.
///
/// The session only moves money two ways, so a push is reported
/// by providers as the outcome the house rules give it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// The bet comes back doubled.
    Win,
    /// The bet is gone.
    Loss,
}

/// This is the trait that decides who won a dealt round. It's
/// the seam that lets tests script results, simulations draw
/// them randomly, and real tables rank the hands.
pub trait OutcomeProvider {
    /// Called once per round after the cards are out.
    ///
    /// # Arguments
    /// - `id` - The id of the session asking.
    /// - `game_state` - The session state with the bet already placed.
    /// - `round` - The hands as dealt.
    fn resolve_round(
        &mut self,
        id: u128,
        game_state: &SessionState,
        round: &DealtRound,
    ) -> Result<RoundOutcome, TableError>;
}

/// Scores the dealt hands under standard house rules.
///
/// A player bust always loses, even if the dealer busts after.
/// Ties go to the house.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowdownProvider;

impl OutcomeProvider for ShowdownProvider {
    fn resolve_round(
        &mut self,
        _id: u128,
        _game_state: &SessionState,
        round: &DealtRound,
    ) -> Result<RoundOutcome, TableError> {
        if round.player.is_bust() {
            return Ok(RoundOutcome::Loss);
        }
        if round.dealer.is_bust() || round.player.total() > round.dealer.total() {
            return Ok(RoundOutcome::Win);
        }
        Ok(RoundOutcome::Loss)
    }
}

/// Always resolves to the same outcome.
#[derive(Debug, Clone, Copy)]
pub struct ConstantOutcomeProvider {
    outcome: RoundOutcome,
}

impl ConstantOutcomeProvider {
    pub fn new(outcome: RoundOutcome) -> Self {
        Self { outcome }
    }
}

impl OutcomeProvider for ConstantOutcomeProvider {
    fn resolve_round(
        &mut self,
        _id: u128,
        _game_state: &SessionState,
        _round: &DealtRound,
    ) -> Result<RoundOutcome, TableError> {
        Ok(self.outcome)
    }
}

/// Replays a scripted list of outcomes, then errors when the
/// script runs dry.
#[derive(Debug, Clone)]
pub struct VecReplayProvider {
    outcomes: Vec<RoundOutcome>,
    idx: usize,
}

impl VecReplayProvider {
    pub fn new(outcomes: Vec<RoundOutcome>) -> Self {
        Self { outcomes, idx: 0 }
    }
}

impl OutcomeProvider for VecReplayProvider {
    fn resolve_round(
        &mut self,
        _id: u128,
        _game_state: &SessionState,
        _round: &DealtRound,
    ) -> Result<RoundOutcome, TableError> {
        let outcome = self
            .outcomes
            .get(self.idx)
            .copied()
            .ok_or(TableError::OutcomeUnavailable)?;
        self.idx += 1;
        Ok(outcome)
    }
}

/// Draws each outcome from a coin weighted by `win_probability`.
/// Useful for bankroll simulations where the card play itself
/// doesn't matter.
#[derive(Debug, Clone)]
pub struct RandomOutcomeProvider<R: Rng> {
    rng: R,
    win_probability: f64,
}

impl<R: Rng> RandomOutcomeProvider<R> {
    pub fn new(rng: R, win_probability: f64) -> Self {
        Self {
            rng,
            win_probability,
        }
    }
}

impl<R: Rng> OutcomeProvider for RandomOutcomeProvider<R> {
    fn resolve_round(
        &mut self,
        _id: u128,
        _game_state: &SessionState,
        _round: &DealtRound,
    ) -> Result<RoundOutcome, TableError> {
        if self.rng.random_bool(self.win_probability) {
            Ok(RoundOutcome::Win)
        } else {
            Ok(RoundOutcome::Loss)
        }
    }
}

impl Default for RandomOutcomeProvider<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::rng(), 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;

    fn round(player: &str, dealer: &str) -> DealtRound {
        DealtRound {
            player: Hand::new_from_str(player).unwrap(),
            dealer: Hand::new_from_str(dealer).unwrap(),
            shoe_shuffled: false,
        }
    }

    fn showdown(player: &str, dealer: &str) -> RoundOutcome {
        let state = SessionState::new(100.0);
        ShowdownProvider
            .resolve_round(0, &state, &round(player, dealer))
            .unwrap()
    }

    #[test]
    fn test_higher_total_wins() {
        assert_eq!(RoundOutcome::Win, showdown("ThTd", "Th9d"));
    }

    #[test]
    fn test_dealer_bust_is_a_win() {
        assert_eq!(RoundOutcome::Win, showdown("7h8d", "Th9d5c"));
    }

    #[test]
    fn test_player_bust_loses_even_when_dealer_busts() {
        assert_eq!(RoundOutcome::Loss, showdown("Th9d5c", "Jh9d4c"));
    }

    #[test]
    fn test_tie_goes_to_the_house() {
        assert_eq!(RoundOutcome::Loss, showdown("ThTd", "JhQd"));
    }

    #[test]
    fn test_replay_runs_dry() {
        let state = SessionState::new(100.0);
        let mut provider = VecReplayProvider::new(vec![RoundOutcome::Win]);

        let first = provider.resolve_round(0, &state, &round("ThTd", "Th9d"));
        assert_eq!(RoundOutcome::Win, first.unwrap());

        let second = provider.resolve_round(0, &state, &round("ThTd", "Th9d"));
        assert!(second.is_err());
    }
}
