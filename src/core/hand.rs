use crate::core::card::{Card, Suit, Value};
use crate::core::error::RSBlackjackError;

use std::fmt;
use std::ops::Index;
use std::slice::Iter;

/// A hand of blackjack cards.
///
/// Unlike a deck a hand can hold the same card more than
/// once, since a multi deck shoe has duplicates.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create an empty hand.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Create a hand with the cards specified.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// From a str create a hand.
    ///
    /// ```
    /// use rs_blackjack::core::Hand;
    /// let hand = Hand::new_from_str("AsTd").unwrap();
    /// assert_eq!(21, hand.total());
    /// ```
    ///
    /// Anything that can't be parsed will return an error.
    ///
    /// ```
    /// use rs_blackjack::core::Hand;
    /// let hand = Hand::new_from_str("AsTx");
    /// assert!(hand.is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, RSBlackjackError> {
        // Get the chars iterator.
        let mut chars = hand_string.chars();
        // Where we will put the cards
        //
        // We make the assumption that the hands will have 2 plus a
        // few cards drawn.
        let mut cards: Vec<Card> = Vec::with_capacity(4);

        // Keep looping until we explicitly break
        loop {
            // Now try and get a char.
            let vco = chars.next();
            // If there was no char then we are done.
            if vco.is_none() {
                break;
            } else {
                // If we got a value char then we should get a
                // suit.
                let sco = chars.next().ok_or(RSBlackjackError::TooFewChars)?;
                // Now try and parse the two chars into a card.
                let v = vco
                    .and_then(Value::from_char)
                    .ok_or(RSBlackjackError::UnexpectedValueChar)?;
                let s = Suit::from_char(sco).ok_or(RSBlackjackError::UnexpectedSuitChar)?;

                cards.push(Card { value: v, suit: s });
            }
        }

        Ok(Self { cards })
    }

    /// Add a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// How many cards are in the hand ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is there anything in the hand ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Produce an iter of the cards in the hand.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// Cards as a slice.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The best blackjack total for this hand.
    ///
    /// Aces start out worth eleven and are demoted to one,
    /// one at a time, while the hand would otherwise bust.
    ///
    /// ```
    /// use rs_blackjack::core::Hand;
    ///
    /// assert_eq!(21, Hand::new_from_str("AhAs9d").unwrap().total());
    /// assert_eq!(20, Hand::new_from_str("ThTd").unwrap().total());
    /// ```
    pub fn total(&self) -> u8 {
        let mut total: u8 = 0;
        let mut aces: u8 = 0;
        for card in &self.cards {
            total += card.value.blackjack_weight();
            if card.value == Value::Ace {
                aces += 1;
            }
        }
        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total
    }

    /// Is an ace currently counted as eleven ?
    pub fn is_soft(&self) -> bool {
        let min_total: u8 = self
            .cards
            .iter()
            .map(|c| {
                if c.value == Value::Ace {
                    1
                } else {
                    c.value.blackjack_weight()
                }
            })
            .sum();
        let has_ace = self.cards.iter().any(|c| c.value == Value::Ace);
        has_ace && min_total + 10 == self.total()
    }

    /// A natural, twenty one from the first two cards.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Has the hand gone over twenty one ?
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_card() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.push(Card {
            value: Value::Three,
            suit: Suit::Spade,
        });
        assert_eq!(1, hand.len());
        assert_eq!(3, hand.total());
    }

    #[test]
    fn test_total_demotes_aces() {
        let hand = Hand::new_from_str("AhAs9d").unwrap();
        assert_eq!(21, hand.total());
        assert!(hand.is_soft());
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn test_hard_total() {
        let hand = Hand::new_from_str("ThTd").unwrap();
        assert_eq!(20, hand.total());
        assert!(!hand.is_soft());
    }

    #[test]
    fn test_blackjack() {
        let hand = Hand::new_from_str("AhKs").unwrap();
        assert_eq!(21, hand.total());
        assert!(hand.is_blackjack());
        assert!(hand.is_soft());
    }

    #[test]
    fn test_bust() {
        let hand = Hand::new_from_str("Th9d5c").unwrap();
        assert_eq!(24, hand.total());
        assert!(hand.is_bust());
    }

    #[test]
    fn test_ace_rescues_then_busts() {
        let mut hand = Hand::new_from_str("Ah9d").unwrap();
        assert_eq!(20, hand.total());
        hand.push(Card::new(Value::Five, Suit::Club));
        assert_eq!(15, hand.total());
        assert!(!hand.is_soft());
    }

    #[test]
    fn test_parse_error_on_bad_value() {
        assert!(Hand::new_from_str("Xh").is_err());
    }

    #[test]
    fn test_parse_error_on_bad_suit() {
        assert!(Hand::new_from_str("Ax").is_err());
    }

    #[test]
    fn test_parse_error_on_dangling_char() {
        assert!(Hand::new_from_str("AhT").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let hand = Hand::new_from_str("Ad8c").unwrap();
        assert_eq!("Ad8c", format!("{hand}"));
    }
}
