//! RS Blackjack is a library for blackjack betting sessions.
//! It covers card values, multi-deck shoes, blackjack hand
//! arithmetic, and Hi-Lo counting, together with a table module
//! where agents wager from a bankroll across repeated rounds and
//! every result is tallied into a statistics record.

/// Allow all the core card functionality to be used
/// externally. Everything in core is agnostic to how a
/// session is driven.
pub mod core;

/// Table sessions played via agents or the interactive console:
/// session state, statistics, dealers, outcome providers, and
/// historians.
#[cfg(feature = "table")]
pub mod table;
