use super::classify::Classification;
use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// How profitably a made badugi can be broken by discarding its weakest
/// card and drawing again.
///
/// Missing low ranks contribute more than missing high ranks, since
/// replacing into a low rank improves the hand more: each rank r absent
/// from the hand adds (14 - r) on the Ace=1..King=13 scale. Defined only
/// for four-card classifications; everything else scores zero with no
/// breakable card and no improving ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakability {
    score: u8,
    discard: Option<Card>,
    ranks: u16,
}

impl Breakability {
    /// hard ceiling on the score, the sum of (14 - r) over all 13 ranks
    pub const MAX: u8 = 91;

    pub fn score(&self) -> u8 {
        self.score
    }

    /// the candidate to throw away, the highest card of a made badugi
    pub fn discard(&self) -> Option<Card> {
        self.discard
    }

    /// the ranks a replacement card could improve into
    pub fn improving(&self) -> Vec<Rank> {
        Rank::all()
            .iter()
            .copied()
            .filter(|r| self.ranks & u16::from(*r) != 0)
            .collect()
    }

    fn zero() -> Self {
        Self {
            score: 0,
            discard: None,
            ranks: 0,
        }
    }
}

impl From<Classification> for Breakability {
    fn from(class: Classification) -> Self {
        match class {
            Classification::Four(hand) => {
                let missing = !hand.ranks() & Rank::mask();
                let score = Rank::all()
                    .iter()
                    .filter(|r| missing & u16::from(**r) != 0)
                    .map(|r| 14 - r.value() as u32)
                    .sum::<u32>()
                    .min(Self::MAX as u32) as u8;
                Self {
                    score,
                    discard: hand.highest(),
                    ranks: missing,
                }
            }
            _ => Self::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::hand::Hand;

    #[test]
    fn bounds() {
        for _ in 0..1000 {
            let class = Classification::from(Hand::random());
            let breaks = Breakability::from(class);
            assert!(breaks.score() <= Breakability::MAX);
            match class.size() {
                4 => assert!(breaks.score() > 0 && breaks.discard().is_some()),
                _ => {
                    assert!(breaks.score() == 0);
                    assert!(breaks.discard().is_none());
                    assert!(breaks.improving().is_empty());
                }
            }
        }
    }

    #[test]
    fn rough_hands_break_more() {
        let wheel = Classification::from(Hand::from("Ac 2d 3h 4s"));
        let rough = Classification::from(Hand::from("9c Td Jh Qs"));
        assert!(Breakability::from(rough).score() > Breakability::from(wheel).score());
    }

    #[test]
    fn discards_the_highest() {
        let class = Classification::from(Hand::from("Ac 2d 3h Qs"));
        let breaks = Breakability::from(class);
        assert!(breaks.discard() == Some(Card::from("Qs")));
    }

    #[test]
    fn improving_ranks_are_the_missing_ranks() {
        let class = Classification::from(Hand::from("Ac 2d 3h 4s"));
        let improving = Breakability::from(class).improving();
        assert!(improving.len() == 9);
        assert!(!improving.contains(&Rank::Ace));
        assert!(improving.contains(&Rank::Five));
        assert!(improving.contains(&Rank::King));
    }

    #[test]
    fn wheel_score() {
        // missing ranks 5..K contribute 9+8+7+6+5+4+3+2+1
        let class = Classification::from(Hand::from("Ac 2d 3h 4s"));
        assert!(Breakability::from(class).score() == 45);
    }
}
