use std::fmt::Debug;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::ser::SerializeSeq;

use super::Card;

/// A deck of cards backed by a bitset.
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card is still in the deck
/// The bit is unset if the card has been removed
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl Deck {
    /// Create a new empty deck
    ///
    /// ```
    /// use rs_blackjack::core::Deck;
    /// let cards = Deck::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// This does what it says on the tin, it inserts a card into the deck
    ///
    /// ```
    /// use rs_blackjack::core::{Card, Deck, Suit, Value};
    /// let mut cards = Deck::new();
    ///
    /// cards.insert(Card::new(Value::Six, Suit::Club));
    /// cards.insert(Card::new(Value::King, Suit::Club));
    /// cards.insert(Card::new(Value::Ace, Suit::Club));
    /// assert_eq!(3, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) {
        self.cards |= 1 << u8::from(card);
    }

    /// Remove a card from the deck
    ///
    /// ```
    /// use rs_blackjack::core::{Card, Deck, Suit, Value};
    /// let mut cards = Deck::default();
    ///
    /// assert!(cards.contains(Card::new(Value::Six, Suit::Club)));
    /// cards.remove(Card::new(Value::Six, Suit::Club));
    /// assert!(!cards.contains(Card::new(Value::Six, Suit::Club)));
    /// ```
    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << u8::from(card));
    }

    /// Is the card in the deck ?
    ///
    /// ```
    /// use rs_blackjack::core::{Card, Deck, Suit, Value};
    ///
    /// let mut cards = Deck::new();
    /// cards.insert(Card::from(17));
    ///
    /// assert!(cards.contains(Card::new(Value::Six, Suit::Club)));
    /// ```
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    /// Is the deck empty ?
    ///
    /// ```
    /// use rs_blackjack::core::{Card, Deck};
    ///
    /// let mut cards = Deck::new();
    /// assert!(cards.is_empty());
    ///
    /// cards.insert(Card::from(17));
    /// assert!(!cards.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are left in the deck ?
    ///
    /// ```
    /// use rs_blackjack::core::{Card, Deck};
    /// let mut cards = Deck::new();
    ///
    /// assert_eq!(0, cards.count());
    /// for card in 0..13 {
    ///     cards.insert(Card::from(card));
    ///     assert_eq!(card as usize + 1, cards.count());
    /// }
    /// assert_eq!(13, cards.count());
    /// ```
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Deal a uniformly random card out of the deck.
    ///
    /// Returns `None` if the deck is empty
    ///
    /// ```
    /// use rand::rng;
    /// use rs_blackjack::core::Deck;
    ///
    /// let mut cards = Deck::default();
    /// let card = cards.deal(&mut rng()).unwrap();
    /// assert!(!cards.contains(card));
    /// assert_eq!(51, cards.count());
    /// ```
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        let nth = rng.random_range(0..self.count());
        // Walk down to the chosen set bit
        let mut remaining = self.cards;
        for _ in 0..nth {
            remaining &= remaining - 1;
        }
        let card = Card::from(remaining.trailing_zeros() as u8);
        self.remove(card);
        Some(card)
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use rs_blackjack::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().count());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Deck {
    /// Iterate the cards still in the deck in packed byte order.
    pub fn iter(&self) -> DeckIter {
        DeckIter { cards: self.cards }
    }
}

/// Iterator over the cards of a `Deck`, lowest packed byte first.
#[derive(Debug, Clone)]
pub struct DeckIter {
    cards: u64,
}

impl Iterator for DeckIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.cards == 0 {
            None
        } else {
            let idx = self.cards.trailing_zeros() as u8;
            // Clear the lowest set bit
            self.cards &= self.cards - 1;
            Some(Card::from(idx))
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = DeckIter;

    fn into_iter(self) -> DeckIter {
        self.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for card in iter {
            deck.insert(card);
        }
        deck
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Deck {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for card in (*self).into_iter() {
            seq.serialize_element(&card)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct DeckVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for DeckVisitor {
    type Value = Deck;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of cards")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut deck = Deck::new();
        while let Some(card) = seq.next_element()? {
            deck.insert(card);
        }
        Ok(deck)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Deck {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(DeckVisitor)
    }
}
