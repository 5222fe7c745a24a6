use super::errors::GameStateError;
use super::outcome::RoundOutcome;
use super::stats::SessionStats;

/// Where a betting session currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The session exists but the bankroll hasn't been committed yet.
    AwaitingInitialBankroll,
    /// Waiting on the player to put up a bet.
    AwaitingBet,
    /// A bet is down and cards are in the air.
    RoundInProgress,
    /// The round resolved and the player can walk away.
    CheckingContinuation,
    /// The session is over. Nothing left to do.
    Complete,
}

/// The full state of one betting session.
///
/// All money movement goes through here so the bankroll, the
/// current bet, and the statistics can never drift apart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    /// The phase the session is in.
    pub phase: Phase,
    /// Money the player has left.
    pub bankroll: f64,
    /// The bet riding on the current round. Zero between rounds.
    pub current_bet: f64,
    /// Win and loss bookkeeping.
    pub stats: SessionStats,
}

impl SessionState {
    /// Create a session that will start with `bankroll`.
    pub fn new(bankroll: f64) -> Self {
        Self {
            phase: Phase::AwaitingInitialBankroll,
            bankroll,
            current_bet: 0.0,
            stats: SessionStats::new(bankroll),
        }
    }

    /// Commit the starting bankroll and open the session for betting.
    pub fn start(&mut self) -> Result<(), GameStateError> {
        if self.phase != Phase::AwaitingInitialBankroll {
            return Err(GameStateError::InvalidPhaseTransition);
        }
        // The bankroll has to be worth playing for.
        if !(self.bankroll > 0.0) {
            return Err(GameStateError::BankrollNotPositive);
        }
        self.phase = Phase::AwaitingBet;
        Ok(())
    }

    /// Put `bet` on the next round.
    ///
    /// The bet is validated before anything changes, so a rejected
    /// bet leaves the session exactly where it was.
    pub fn place_bet(&mut self, bet: f64) -> Result<(), GameStateError> {
        if self.phase != Phase::AwaitingBet {
            return Err(GameStateError::InvalidPhaseTransition);
        }
        // This comparison is written so NaN fails it too.
        if !(bet > 0.0) {
            return Err(GameStateError::BetNotPositive);
        }
        if bet > self.bankroll {
            return Err(GameStateError::BetExceedsBankroll);
        }
        self.current_bet = bet;
        self.phase = Phase::RoundInProgress;
        Ok(())
    }

    /// Settle the round at `outcome`, moving the bet in or out of the
    /// bankroll and updating the statistics.
    ///
    /// Returns the signed bankroll change.
    pub fn resolve_round(&mut self, outcome: RoundOutcome) -> Result<f64, GameStateError> {
        if self.phase != Phase::RoundInProgress {
            return Err(GameStateError::InvalidPhaseTransition);
        }
        let bet = self.current_bet;
        let change = match outcome {
            RoundOutcome::Win => {
                self.bankroll += bet;
                self.stats.record_win(bet);
                bet
            }
            RoundOutcome::Loss => {
                self.bankroll -= bet;
                self.stats.record_loss(bet);
                -bet
            }
        };
        self.stats.observe_bankroll(self.bankroll);
        self.current_bet = 0.0;
        self.phase = Phase::CheckingContinuation;
        Ok(change)
    }

    /// Can the player still put up a bet ?
    pub fn is_solvent(&self) -> bool {
        self.bankroll > 0.0
    }

    /// Decide whether the session goes on.
    ///
    /// A busted player is done no matter what `keep_playing` says.
    pub fn continue_session(&mut self, keep_playing: bool) -> Result<(), GameStateError> {
        if self.phase != Phase::CheckingContinuation {
            return Err(GameStateError::InvalidPhaseTransition);
        }
        if !self.is_solvent() || !keep_playing {
            self.phase = Phase::Complete;
        } else {
            self.phase = Phase::AwaitingBet;
        }
        Ok(())
    }

    /// Walk away before putting up a bet.
    pub fn leave(&mut self) -> Result<(), GameStateError> {
        if self.phase != Phase::AwaitingBet {
            return Err(GameStateError::InvalidPhaseTransition);
        }
        self.phase = Phase::Complete;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}
