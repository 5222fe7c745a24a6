//! This is the table module for blackjack betting sessions via agents.
//!
//! # Single Session
//!
//! The tools allow explicit control over the
//! session all the way down to the rng.
//!
//! ## Single Session Example
//!
//! ```
//! use rs_blackjack::table::{RoundOutcome, SessionState, TableSessionBuilder};
//! use rs_blackjack::table::agent::VecReplayAgent;
//! use rs_blackjack::table::outcome::VecReplayProvider;
//!
//! let game_state = SessionState::new(100.0);
//! let mut session = TableSessionBuilder::default()
//!     .game_state(game_state)
//!     .agent(Box::new(VecReplayAgent::new(vec![10.0, 10.0])))
//!     .provider(Box::new(VecReplayProvider::new(vec![
//!         RoundOutcome::Win,
//!         RoundOutcome::Loss,
//!     ])))
//!     .build()
//!     .unwrap();
//!
//! session.run().unwrap();
//!
//! // One win and one loss at the same stake cancel out.
//! assert_eq!(100.0, session.game_state.bankroll);
//! assert_eq!(2, session.game_state.stats.hands_played);
//! ```
//!
//! # Interactive Session Example
//!
//! The same bookkeeping drives the interactive console loop, so it
//! can be tested against any reader and writer.
//!
//! ```
//! use std::io::Cursor;
//! use rs_blackjack::table::ConsoleSession;
//!
//! let mut out = Vec::new();
//! let game_state = ConsoleSession::new(Cursor::new("100\n20\ny\nn\n"), &mut out)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(120.0, game_state.bankroll);
//! assert_eq!(1, game_state.stats.hands_won);
//! ```
//!
//! # Card Counting Example
//!
//! A `CountingHistorian` can keep a Hi-Lo count in step with the
//! dealt cards while a `CountingBetAgent` bets it.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use rand::{SeedableRng, rngs::StdRng};
//! use rs_blackjack::core::HiLoCount;
//! use rs_blackjack::table::{RngTableSessionBuilder, SessionState};
//! use rs_blackjack::table::agent::CountingBetAgent;
//! use rs_blackjack::table::historian::CountingHistorian;
//!
//! let count = Rc::new(RefCell::new(HiLoCount::new(6)));
//!
//! let mut session = RngTableSessionBuilder::default()
//!     .game_state(SessionState::new(500.0))
//!     .agent(Box::new(CountingBetAgent::new(count.clone(), 5.0)))
//!     .historians(vec![Box::new(CountingHistorian::new(count.clone()))])
//!     .rng(StdRng::seed_from_u64(420))
//!     .build()
//!     .unwrap();
//!
//! session.run().unwrap();
//!
//! assert!(session.game_state.is_complete());
//! ```
pub mod action;
pub mod agent;
pub mod builder;
pub mod console;
pub mod dealer;
pub mod errors;
pub mod game_state;
pub mod historian;
pub mod outcome;
pub mod session;
pub mod stats;

#[cfg(any(test, feature = "table-test-util"))]
pub mod test_util;

pub use agent::Agent;
pub use builder::{RngTableSessionBuilder, TableSessionBuilder};
pub use console::{ConsoleError, ConsoleSession};
pub use dealer::{Dealer, DealtRound, ShoeDealer};
pub use errors::{GameStateError, TableError, TableSessionError};
pub use game_state::{Phase, SessionState};
pub use historian::{Historian, HistorianError};
pub use outcome::{OutcomeProvider, RoundOutcome, ShowdownProvider};
pub use session::TableSession;
pub use stats::SessionStats;
