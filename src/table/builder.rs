use rand::{Rng, rngs::ThreadRng};

use super::Agent;
use super::agent::WalkAwayAgent;
use super::dealer::{Dealer, ShoeDealer};
use super::errors::TableSessionError;
use super::game_state::SessionState;
use super::historian::Historian;
use super::outcome::{OutcomeProvider, ShowdownProvider};
use super::session::TableSession;

/// # TableSessionBuilder
///
/// `RngTableSessionBuilder` is a builder to allow for complex
/// configurations of a blackjack session played via an agent. A game
/// state is required, other fields are optional.
///
/// `TableSessionBuilder` is a type alias
/// for `RngTableSessionBuilder<ThreadRng>` which is the default builder.
///
/// ## Setters
///
/// Each setter will set the optional value to the passed in value. Then return
/// the mutated builder.
///
/// While an agent is not required the default refuses to bet at all.
/// So likely not that interesting a session.
///
/// ## Examples
///
/// ```
/// use rs_blackjack::table::{SessionState, TableSessionBuilder};
///
/// let game_state = SessionState::new(100.0);
/// let sim = TableSessionBuilder::default()
///     .game_state(game_state)
///     .build()
///     .unwrap();
/// ```
/// However sometimes you want to use a known but random session. In that
/// case you can pass in the rng like this:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_blackjack::table::{RngTableSessionBuilder, SessionState};
///
/// let game_state = SessionState::new(100.0);
/// let rng = StdRng::seed_from_u64(420);
/// let sim = RngTableSessionBuilder::default()
///     .game_state(game_state)
///     .rng(rng)
///     .build()
///     .unwrap();
/// ```
pub struct RngTableSessionBuilder<R: Rng> {
    agent: Option<Box<dyn Agent>>,
    dealer: Option<Box<dyn Dealer>>,
    provider: Option<Box<dyn OutcomeProvider>>,
    historians: Vec<Box<dyn Historian>>,
    game_state: Option<SessionState>,
    rng: Option<R>,
    panic_on_historian_error: bool,
}

impl<R: Rng> RngTableSessionBuilder<R> {
    /// Set the agent for the session created by this builder.
    pub fn agent(mut self, agent: Box<dyn Agent>) -> Self {
        self.agent = Some(agent);
        self
    }

    /// Set the dealer. If not set a six deck shoe dealer will be
    /// created from the rng.
    pub fn dealer(mut self, dealer: Box<dyn Dealer>) -> Self {
        self.dealer = Some(dealer);
        self
    }

    /// Set the outcome provider for the session created by this builder.
    pub fn provider(mut self, provider: Box<dyn OutcomeProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the game state for the session created by this builder.
    pub fn game_state(mut self, game_state: SessionState) -> Self {
        self.game_state = Some(game_state);
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Set the historians for the session created by this builder.
    pub fn historians(mut self, historians: Vec<Box<dyn Historian>>) -> Self {
        self.historians = historians;
        self
    }

    /// Panic the whole session if a historian fails to record an
    /// action rather than dropping the historian.
    pub fn panic_on_historian_error(mut self, panic_on_historian_error: bool) -> Self {
        self.panic_on_historian_error = panic_on_historian_error;
        self
    }
}

impl<R: Rng + 'static> RngTableSessionBuilder<R> {
    /// Given the fields already specified build any that are not specified and
    /// create a new TableSession.
    ///
    /// @returns TableSessionError if no game_state was given.
    pub fn build(self) -> Result<TableSession, TableSessionError> {
        let game_state = self.game_state.ok_or(TableSessionError::NeedGameState)?;

        let agent = self.agent.unwrap_or_else(|| Box::<WalkAwayAgent>::default());
        let provider = self.provider.unwrap_or_else(|| Box::new(ShowdownProvider));

        // Create a new session id from the rng. This will be used to
        // track this exact run of a session. The same rng then deals
        // the cards so a seeded session is fully deterministic.
        let (id, dealer) = match self.rng {
            Some(mut rng) => {
                let id = rng.random::<u128>();
                let dealer = self
                    .dealer
                    .unwrap_or_else(move || Box::new(ShoeDealer::new(6, rng)));
                (id, dealer)
            }
            None => {
                let mut rng = rand::rng();
                let id = rng.random::<u128>();
                let dealer = self
                    .dealer
                    .unwrap_or_else(move || Box::new(ShoeDealer::new(6, rng)));
                (id, dealer)
            }
        };

        Ok(TableSession {
            game_state,
            agent,
            dealer,
            provider,
            historians: self.historians,
            panic_on_historian_error: self.panic_on_historian_error,
            id,
        })
    }
}

impl<R: Rng> Default for RngTableSessionBuilder<R> {
    fn default() -> Self {
        Self {
            agent: None,
            dealer: None,
            provider: None,
            historians: vec![],
            game_state: None,
            rng: None,
            panic_on_historian_error: false,
        }
    }
}

/// The rng is ThreadRng.
pub type TableSessionBuilder = RngTableSessionBuilder<ThreadRng>;

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_needs_game_state() {
        let result = TableSessionBuilder::default().build();
        assert!(result.is_err());
    }

    #[test_log::test]
    fn test_seeded_sessions_share_an_id() {
        let first = RngTableSessionBuilder::default()
            .game_state(SessionState::new(100.0))
            .rng(StdRng::seed_from_u64(420))
            .build()
            .unwrap();
        let second = RngTableSessionBuilder::default()
            .game_state(SessionState::new(100.0))
            .rng(StdRng::seed_from_u64(420))
            .build()
            .unwrap();

        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn test_thread_rng_ids_differ() {
        let first = TableSessionBuilder::default()
            .game_state(SessionState::new(100.0))
            .build()
            .unwrap();
        let second = TableSessionBuilder::default()
            .game_state(SessionState::new(100.0))
            .build()
            .unwrap();

        assert_ne!(first.id(), second.id());
    }
}
