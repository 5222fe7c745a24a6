use approx::assert_relative_eq;

use super::action::Action;
use super::game_state::SessionState;
use super::historian::HistoryRecord;
use super::outcome::RoundOutcome;
use super::stats::SessionStats;

pub fn assert_valid_stats(stats: &SessionStats) {
    // Every played hand went one way or the other.
    assert_eq!(stats.hands_played, stats.hands_won + stats.hands_lost);

    assert!(stats.biggest_win >= 0.0);
    assert!(stats.biggest_loss >= 0.0);

    // The peak can never be below where the session started.
    assert!(stats.peak_bankroll >= stats.initial_bankroll);
}

/// Replay the resolved rounds out of the history and check the
/// final bankroll agrees with them.
pub fn assert_bankroll_conserved(game_state: &SessionState, records: &[HistoryRecord]) {
    let net: f64 = records
        .iter()
        .map(|record| match record.action {
            Action::RoundResolved { outcome, bet, .. } => match outcome {
                RoundOutcome::Win => bet,
                RoundOutcome::Loss => -bet,
            },
            _ => 0.0,
        })
        .sum();

    assert_relative_eq!(
        game_state.bankroll,
        game_state.stats.initial_bankroll + net,
        epsilon = 1e-9
    );
}
