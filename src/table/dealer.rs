use rand::Rng;
use rand::rngs::ThreadRng;

use crate::core::{Card, Hand, Shoe};

use super::errors::TableError;
use super::game_state::SessionState;

/// The hands from one dealt round of blackjack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealtRound {
    /// The player's completed hand.
    pub player: Hand,
    /// The dealer's completed hand.
    pub dealer: Hand,
    /// Whether the shoe was reshuffled before this round went out.
    pub shoe_shuffled: bool,
}

/// This is the trait that puts cards on the table each round.
pub trait Dealer {
    /// Deal one full round for the session.
    ///
    /// # Arguments
    /// - `id` - The id of the session being dealt to.
    /// - `game_state` - The session state with the bet already placed.
    fn deal_round(
        &mut self,
        id: u128,
        game_state: &SessionState,
    ) -> Result<DealtRound, TableError>;
}

/// A dealer working out of a multi deck shoe.
///
/// The shoe is reshuffled between rounds once the cut card is
/// reached, never in the middle of a round.
pub struct ShoeDealer<R: Rng> {
    shoe: Shoe,
    rng: R,
    decks: usize,
    cut_fraction: f64,
}

impl<R: Rng> ShoeDealer<R> {
    /// Create a dealer with a freshly shuffled shoe of `decks` decks.
    pub fn new(decks: usize, mut rng: R) -> Self {
        let mut shoe = Shoe::new(decks);
        shoe.shuffle(&mut rng);
        Self {
            shoe,
            rng,
            decks,
            cut_fraction: 0.75,
        }
    }

    /// Set how deep into the shoe the cut card sits.
    pub fn cut_fraction(mut self, cut_fraction: f64) -> Self {
        self.cut_fraction = cut_fraction;
        self
    }

    /// Replace the shoe with an exact stack of cards.
    pub fn with_shoe(mut self, shoe: Shoe) -> Self {
        self.shoe = shoe;
        self
    }

    /// The cards left to deal.
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    fn draw(&mut self) -> Result<Card, TableError> {
        self.shoe.deal().ok_or(TableError::EmptyShoe)
    }
}

impl<R: Rng> Dealer for ShoeDealer<R> {
    fn deal_round(
        &mut self,
        _id: u128,
        _game_state: &SessionState,
    ) -> Result<DealtRound, TableError> {
        // Check the cut card before the round, not during it.
        let shoe_shuffled = self.shoe.dealt_fraction() >= self.cut_fraction;
        if shoe_shuffled {
            self.shoe = Shoe::new(self.decks);
            self.shoe.shuffle(&mut self.rng);
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();

        // Alternate the opening deal the way a live table does.
        player.push(self.draw()?);
        dealer.push(self.draw()?);
        player.push(self.draw()?);
        dealer.push(self.draw()?);

        // Dealer stands on 17.
        while dealer.total() < 17 {
            dealer.push(self.draw()?);
        }

        Ok(DealtRound {
            player,
            dealer,
            shoe_shuffled,
        })
    }
}

impl Default for ShoeDealer<ThreadRng> {
    fn default() -> Self {
        Self::new(6, rand::rng())
    }
}
