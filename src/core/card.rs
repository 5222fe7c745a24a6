use std::fmt;
use std::mem;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    pub fn from_u8(v: u8) -> Value {
        unsafe { mem::transmute(v) }
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck or shoe.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The character used when printing this value.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// How much this rank is worth toward a blackjack total.
    /// Aces count as eleven here; `Hand::total` demotes them
    /// to one as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_blackjack::core::Value;
    ///
    /// assert_eq!(2, Value::Two.blackjack_weight());
    /// assert_eq!(10, Value::King.blackjack_weight());
    /// assert_eq!(11, Value::Ace.blackjack_weight());
    /// ```
    pub fn blackjack_weight(self) -> u8 {
        match self {
            Value::Two => 2,
            Value::Three => 3,
            Value::Four => 4,
            Value::Five => 5,
            Value::Six => 6,
            Value::Seven => 7,
            Value::Eight => 8,
            Value::Nine => 9,
            Value::Ten | Value::Jack | Value::Queen | Value::King => 10,
            Value::Ace => 11,
        }
    }

    /// The Hi-Lo tag for this rank. Low cards help the player
    /// once they're gone, so seeing one adds to the count.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_blackjack::core::Value;
    ///
    /// assert_eq!(1, Value::Five.hi_lo());
    /// assert_eq!(0, Value::Eight.hi_lo());
    /// assert_eq!(-1, Value::Ace.hi_lo());
    /// ```
    pub fn hi_lo(self) -> i32 {
        match self {
            Value::Two | Value::Three | Value::Four | Value::Five | Value::Six => 1,
            Value::Seven | Value::Eight | Value::Nine => 0,
            Value::Ten | Value::Jack | Value::Queen | Value::King | Value::Ace => -1,
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Suit {
        unsafe { mem::transmute(s) }
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// The character used when printing this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of the core module.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_blackjack::core::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ace, Suit::Heart);
    /// assert_eq!(Value::Ace, card.value);
    /// ```
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Pack a card into a single byte. Used for the deck bitset.
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.value as u8) * 4 + (c.suit as u8)
    }
}

/// Unpack a card from its byte form.
impl From<u8> for Card {
    fn from(b: u8) -> Card {
        Card {
            value: Value::from_u8(b / 4),
            suit: Suit::from_u8(b % 4),
        }
    }
}

/// Cards print in the short form used everywhere, value
/// character then suit character.
///
/// # Examples
///
/// ```
/// use rs_blackjack::core::{Card, Suit, Value};
///
/// let card = Card::new(Value::Ten, Suit::Spade);
/// assert_eq!("Ts", card.to_string());
/// ```
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        let c2 = Card {
            value: Value::Four,
            suit: Suit::Spade,
        };
        let c3 = Card {
            value: Value::Four,
            suit: Suit::Club,
        };

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 > c2);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Value::Two, Value::from_u8(0));
        assert_eq!(Value::Ace, Value::from_u8(12));
    }

    #[test]
    fn test_card_u8_round_trip() {
        for b in 0..52u8 {
            let c = Card::from(b);
            assert_eq!(b, u8::from(c));
        }
        assert_eq!(Card::new(Value::Six, Suit::Club), Card::from(17));
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }

    #[test]
    fn test_blackjack_weights() {
        let total: u32 = Value::values()
            .iter()
            .map(|v| u32::from(v.blackjack_weight()))
            .sum();
        // 2 through 9, four ten values, and an ace
        assert_eq!(44 + 40 + 11, total);
    }

    #[test]
    fn test_hi_lo_balances_over_all_values() {
        let total: i32 = Value::values().iter().map(|v| v.hi_lo()).sum();
        assert_eq!(0, total);
    }

    #[test]
    fn test_char_round_trip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_display() {
        let c = Card::new(Value::Ace, Suit::Heart);
        assert_eq!("Ah", format!("{c}"));
    }
}
