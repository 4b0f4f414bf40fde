use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends Hand with the ability to remove cards from itself.
/// Draws are random but driven by a caller-owned Rng, so a seeded
/// session replays identically.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from((1 << 52) - 1))
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a random card from the deck
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n as u8);
        let mut ones = 0u8;
        let mut deck = u64::from(self.0);
        let mut card = u64::from(self.0).trailing_zeros() as u8;
        while ones < i {
            deck = deck & (deck - 1);
            card = deck.trailing_zeros() as u8;
            ones = ones + 1;
        }
        let card = Card::from(card);
        self.remove(card);
        card
    }

    /// remove n random cards from the deck
    /// to deal a starting hand or draw replacements
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn deal_shrinks_deck() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let hand = deck.deal(4, rng);
        assert!(hand.size() == 4);
        assert!(deck.size() == 48);
        assert!(Hand::from(deck).minus(hand) == Hand::from(deck));
    }

    #[test]
    fn seeded_draws_replay() {
        let ref mut a = SmallRng::seed_from_u64(42);
        let ref mut b = SmallRng::seed_from_u64(42);
        assert!(Deck::new().deal(8, a) == Deck::new().deal(8, b));
    }
}
