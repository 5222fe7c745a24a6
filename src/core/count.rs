use crate::core::card::Card;

/// A running Hi-Lo card count for a shoe of `decks` decks.
///
/// Low cards (two through six) add one, neutral cards
/// (seven through nine) add nothing, and tens and aces
/// subtract one. The true count divides the running count
/// by the decks still undealt.
///
/// ```
/// use rs_blackjack::core::{Hand, HiLoCount};
///
/// let mut count = HiLoCount::new(6);
/// let dealt = Hand::new_from_str("5c6dKh").unwrap();
/// count.observe_all(dealt.iter());
/// assert_eq!(1, count.running_count());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiLoCount {
    running: i32,
    cards_seen: u32,
    decks: u32,
}

impl HiLoCount {
    /// Start a fresh count for a shoe of `decks` decks.
    pub fn new(decks: u32) -> Self {
        Self {
            running: 0,
            cards_seen: 0,
            decks,
        }
    }

    /// Count a single dealt card.
    pub fn observe(&mut self, card: Card) {
        self.running += card.value.hi_lo();
        self.cards_seen += 1;
    }

    /// Count every card in the iterator.
    pub fn observe_all<'a, I: IntoIterator<Item = &'a Card>>(&mut self, cards: I) {
        for card in cards {
            self.observe(*card);
        }
    }

    /// The raw running count.
    pub fn running_count(&self) -> i32 {
        self.running
    }

    /// How many cards have been counted since the last reset.
    pub fn cards_seen(&self) -> u32 {
        self.cards_seen
    }

    /// Decks still undealt, rounded to one decimal place.
    pub fn remaining_decks(&self) -> f64 {
        let remaining = (self.decks * 52).saturating_sub(self.cards_seen);
        (f64::from(remaining) / 52.0 * 10.0).round() / 10.0
    }

    /// The running count normalized by the remaining decks,
    /// rounded to one decimal place.
    ///
    /// When the shoe is exhausted this is zero rather than
    /// a division by zero.
    pub fn true_count(&self) -> f64 {
        let remaining = self.remaining_decks();
        if remaining == 0.0 {
            return 0.0;
        }
        (f64::from(self.running) / remaining * 10.0).round() / 10.0
    }

    /// Betting units suggested by the current true count.
    ///
    /// ```
    /// use rs_blackjack::core::HiLoCount;
    ///
    /// assert_eq!(1, HiLoCount::new(6).suggested_units());
    /// ```
    pub fn suggested_units(&self) -> u32 {
        let true_count = self.true_count();
        if true_count <= 2.0 {
            1
        } else if true_count < 3.0 {
            2
        } else if true_count < 4.0 {
            4
        } else {
            8
        }
    }

    /// Forget everything. Used when the shoe is reshuffled.
    pub fn reset(&mut self) {
        self.running = 0;
        self.cards_seen = 0;
    }
}
