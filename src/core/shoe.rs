use crate::core::card::Card;
use crate::core::deck::Deck;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

/// `Shoe` is a dealing shoe of one or more 52 card decks.
///
/// Cards are stored in a `Vec` so the shoe can be shuffled
/// and dealt from the back in O(1).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shoe {
    /// Cards left to deal.
    cards: Vec<Card>,
    /// How many cards the shoe held when it was full.
    capacity: usize,
}

impl Shoe {
    /// Create a shoe holding `decks` full 52 card decks, unshuffled.
    ///
    /// ```
    /// use rs_blackjack::core::Shoe;
    ///
    /// assert_eq!(52, Shoe::new(1).len());
    /// assert_eq!(312, Shoe::new(6).len());
    /// ```
    pub fn new(decks: usize) -> Self {
        let mut cards = Vec::with_capacity(decks * 52);
        for _ in 0..decks {
            cards.extend(Deck::default());
        }
        let capacity = cards.len();
        Self { cards, capacity }
    }

    /// Shuffle the entire shoe.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal a card if there is one.
    ///
    /// This will deal from the back of the shoe.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Add a card back to the shoe.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.capacity = self.capacity.max(self.cards.len());
    }

    /// How many cards are left ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// What fraction of the full shoe has already been dealt.
    ///
    /// An empty shoe counts as fully dealt.
    ///
    /// ```
    /// use rs_blackjack::core::Shoe;
    ///
    /// let mut shoe = Shoe::new(1);
    /// assert_eq!(0.0, shoe.dealt_fraction());
    /// for _ in 0..26 {
    ///     shoe.deal();
    /// }
    /// assert_eq!(0.5, shoe.dealt_fraction());
    /// ```
    pub fn dealt_fraction(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        (self.capacity - self.cards.len()) as f64 / self.capacity as f64
    }

    /// How many decks are left, rounded to one decimal place.
    pub fn remaining_decks(&self) -> f64 {
        ((self.cards.len() as f64) / 52.0 * 10.0).round() / 10.0
    }

    /// Randomly select `n` cards from those remaining, without dealing them.
    pub fn sample(&self, n: usize) -> Vec<Card> {
        let mut rng = rand::rng();
        self.cards.choose_multiple(&mut rng, n).cloned().collect()
    }
}

impl Index<usize> for Shoe {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Index<Range<usize>> for Shoe {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}

impl Index<RangeTo<usize>> for Shoe {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}

impl Index<RangeFrom<usize>> for Shoe {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}

impl Index<RangeFull> for Shoe {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for Shoe {
    /// Build a shoe from an explicit card list. The list is
    /// taken as the full shoe for `dealt_fraction`.
    fn from(cards: Vec<Card>) -> Self {
        let capacity = cards.len();
        Self { cards, capacity }
    }
}

impl From<Deck> for Shoe {
    fn from(deck: Deck) -> Self {
        let cards: Vec<Card> = deck.into_iter().collect();
        cards.into()
    }
}
