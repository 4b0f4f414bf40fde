#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted (Ace-low) deck 0-51
/// Ad
/// 0b00000001
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 injection
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
/// "Ac" "Td" "9s"
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        assert!(s.len() == 2, "Invalid card str: {}", s);
        Self {
            rank: Rank::from(&s[0..1]),
            suit: Suit::from(&s[1..2]),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Card::from(rand::rng().random_range(0..52u8))
    }
}

use super::{rank::Rank, suit::Suit};
use std::fmt::{Display, Formatter, Result};
