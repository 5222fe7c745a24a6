use tracing::{event, trace_span};

use super::Agent;
use super::action::Action;
use super::dealer::Dealer;
use super::errors::TableSessionError;
use super::game_state::{Phase, SessionState};
use super::historian::Historian;
use super::outcome::OutcomeProvider;

/// A table session drives one player's bankroll through rounds of
/// blackjack until the player walks away or busts out.
///
/// The agent decides the bets, the dealer puts out the cards, and
/// the outcome provider settles each round. Historians watch
/// everything happen.
pub struct TableSession {
    pub game_state: SessionState,
    pub(crate) agent: Box<dyn Agent>,
    pub(crate) dealer: Box<dyn Dealer>,
    pub(crate) provider: Box<dyn OutcomeProvider>,
    pub(crate) historians: Vec<Box<dyn Historian>>,
    pub(crate) panic_on_historian_error: bool,
    pub(crate) id: u128,
}

impl TableSession {
    /// The id of this exact run of a session.
    pub fn id(&self) -> u128 {
        self.id
    }

    pub fn more_rounds(&self) -> bool {
        !matches!(self.game_state.phase, Phase::Complete)
    }

    /// Run the session until it completes.
    pub fn run(&mut self) -> Result<(), TableSessionError> {
        let span = trace_span!("TableSession::run");
        let _enter = span.enter();

        while self.more_rounds() {
            self.step()?;
        }
        Ok(())
    }

    /// Advance the session by a single phase.
    pub fn step(&mut self) -> Result<(), TableSessionError> {
        match self.game_state.phase {
            Phase::AwaitingInitialBankroll => self.start(),
            Phase::AwaitingBet => self.take_bet(),
            Phase::RoundInProgress => self.play_round(),
            Phase::CheckingContinuation => self.check_continuation(),

            // There's nothing left to do to this.
            Phase::Complete => Ok(()),
        }
    }

    fn start(&mut self) -> Result<(), TableSessionError> {
        let span = trace_span!("start");
        let _enter = span.enter();

        self.game_state.start()?;
        self.record_action(Action::SessionStart(self.game_state.bankroll));
        Ok(())
    }

    fn take_bet(&mut self) -> Result<(), TableSessionError> {
        let span = trace_span!("take_bet");
        let _enter = span.enter();

        let wanted = self.agent.bet(self.id, &self.game_state);

        // Anything that isn't a positive bet is the agent walking away.
        if !(wanted > 0.0) {
            event!(
                tracing::Level::INFO,
                "Agent left with {}",
                self.game_state.bankroll
            );
            self.game_state.leave()?;
            self.record_action(Action::SessionComplete(self.game_state.bankroll));
            return Ok(());
        }

        // Over-sized bets ride for the whole bankroll instead.
        let bet = if wanted > self.game_state.bankroll {
            event!(
                tracing::Level::WARN,
                "Capping bet {} at the bankroll {}",
                wanted,
                self.game_state.bankroll
            );
            self.game_state.bankroll
        } else {
            wanted
        };

        self.game_state.place_bet(bet)?;
        self.record_action(Action::BetPlaced(bet));
        Ok(())
    }

    fn play_round(&mut self) -> Result<(), TableSessionError> {
        let span = trace_span!("play_round");
        let _enter = span.enter();

        let round = self.dealer.deal_round(self.id, &self.game_state)?;
        if round.shoe_shuffled {
            self.record_action(Action::ShoeShuffled);
        }
        self.record_action(Action::RoundDealt(round.clone()));

        let outcome = self
            .provider
            .resolve_round(self.id, &self.game_state, &round)?;
        let change = self.game_state.resolve_round(outcome)?;

        event!(
            tracing::Level::TRACE,
            "Round resolved {:?} moving {} leaving bankroll {}",
            outcome,
            change,
            self.game_state.bankroll
        );

        self.record_action(Action::RoundResolved {
            outcome,
            bet: change.abs(),
            bankroll_after: self.game_state.bankroll,
        });
        Ok(())
    }

    fn check_continuation(&mut self) -> Result<(), TableSessionError> {
        let span = trace_span!("check_continuation");
        let _enter = span.enter();

        // A busted agent doesn't get a say.
        let busted = !self.game_state.is_solvent();
        let keep_playing = !busted && self.agent.keep_playing(self.id, &self.game_state);

        self.game_state.continue_session(keep_playing)?;

        if busted {
            event!(tracing::Level::INFO, "Agent busted out");
            self.record_action(Action::BustedOut);
        }
        if self.game_state.is_complete() {
            event!(
                tracing::Level::INFO,
                "Session complete with bankroll {}",
                self.game_state.bankroll
            );
            self.record_action(Action::SessionComplete(self.game_state.bankroll));
        }
        Ok(())
    }

    fn record_action(&mut self, action: Action) {
        let game_state = &self.game_state;
        let id = self.id;
        let panic_on_historian_error = self.panic_on_historian_error;

        // Historians that can't keep up are dropped rather than
        // stopping the session.
        self.historians.retain_mut(|historian| {
            match historian.record_action(id, game_state, action.clone()) {
                Ok(()) => true,
                Err(error) => {
                    if panic_on_historian_error {
                        panic!("Historian failed to record action: {error}");
                    }
                    event!(
                        tracing::Level::WARN,
                        "Dropping historian that failed to record action: {}",
                        error
                    );
                    false
                }
            }
        });
    }
}
