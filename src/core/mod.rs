//! This is the core module. It holds the cards, shoes, and
//! blackjack arithmetic that the rest of the crate deals with.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Deck is the normal 52 card deck as a bitset.
mod deck;
/// Export `Deck` and its iterator.
pub use self::deck::{Deck, DeckIter};

/// The flattened multi-deck stack a table deals from.
mod shoe;
/// Export `Shoe`
pub use self::shoe::Shoe;

/// Code related to cards in blackjack hands.
mod hand;
/// Export `Hand`
pub use self::hand::Hand;

/// Hi-Lo counting against a shoe.
mod count;
/// Export `HiLoCount`
pub use self::count::HiLoCount;

/// The error type for core parsing.
mod error;
/// Export `RSBlackjackError`
pub use self::error::RSBlackjackError;
