use super::card::Card;

/// Hand represents an unordered set of Cards stored as a u64 bitstring,
/// one bit per unique card in the 52-card (Ace-low) deck. With the Ace in
/// the least significant bits, iterating from the low end walks cards from
/// best to worst for lowball purposes.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(lhs) & u64::from(rhs) == 0);
        Self(lhs.0 | rhs.0)
    }

    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0 & u64::from(card) != 0
    }

    /// the set difference, removing any of rhs present in self
    pub fn minus(&self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }

    /// bitmask of the 13 ranks represented in this set
    pub fn ranks(&self) -> u16 {
        self.into_iter()
            .map(|c| u16::from(c.rank()))
            .fold(0u16, |mask, rank| mask | rank)
    }

    pub fn lowest(&self) -> Option<Card> {
        if self.size() == 0 {
            None
        } else {
            Some(Card::from(self.0.trailing_zeros() as u8))
        }
    }
    pub fn highest(&self) -> Option<Card> {
        if self.size() == 0 {
            None
        } else {
            Some(Card::from(64 - 1 - self.0.leading_zeros() as u8))
        }
    }
    pub fn remove(&mut self, card: Card) {
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 &= mask;
    }

    pub(crate) const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// str isomorphism
/// "Ac 2d Th Ks"
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        Self(
            s.split_whitespace()
                .map(|c| Card::from(c))
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.into_iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

/// a uniformly random 4-card deal
impl crate::Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut hand = Hand::empty();
        while hand.size() < 4 {
            let card = Card::from(rng.random_range(0..52u8));
            if !hand.contains(card) {
                hand = Hand::add(hand, Hand::from(card));
            }
        }
        hand
    }
}
