use super::dealer::DealtRound;
use super::outcome::RoundOutcome;

/// Everything notable that can happen during a table session.
/// These are what historians get to see.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The session opened with this bankroll.
    SessionStart(f64),
    /// The agent put up this bet.
    BetPlaced(f64),
    /// The shoe was reshuffled before the deal.
    ShoeShuffled,
    /// The cards went out.
    RoundDealt(DealtRound),
    /// The round settled and the money moved.
    RoundResolved {
        outcome: RoundOutcome,
        bet: f64,
        bankroll_after: f64,
    },
    /// The player lost their last dollar.
    BustedOut,
    /// The session is over, leaving with this bankroll.
    SessionComplete(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_placed() {
        let a = Action::BetPlaced(100.0);
        assert_eq!(Action::BetPlaced(100.0), a);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let action = Action::RoundResolved {
            outcome: RoundOutcome::Win,
            bet: 25.0,
            bankroll_after: 125.0,
        };

        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
