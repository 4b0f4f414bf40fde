use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;

/// The best valid Badugi subset of a dealt hand.
///
/// A subset is valid when no two of its cards share a rank and no two
/// share a suit. The classification carries the largest such subset,
/// tie-broken by the lowball ordering: compare highest ranks first,
/// lower wins. Recomputed on demand, never cached.
#[derive(Debug, Clone, Copy)]
pub enum Classification {
    Four(Hand),
    Three(Hand),
    Two(Hand),
    One(Hand),
}

impl Classification {
    /// the card subset realizing this classification
    pub fn cards(&self) -> Hand {
        match self {
            Self::Four(h) | Self::Three(h) | Self::Two(h) | Self::One(h) => *h,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Self::Four(_) => 4,
            Self::Three(_) => 3,
            Self::Two(_) => 2,
            Self::One(_) => 1,
        }
    }

    /// the highest (weakest) rank in the subset
    pub fn high(&self) -> Rank {
        self.cards()
            .highest()
            .map(|c| c.rank())
            .expect("classification is non-empty")
    }

    /// mean gap between consecutive ranks is at most 3.
    /// low-gap hands keep more live improving cards.
    pub fn is_smooth(&self) -> bool {
        let values = self
            .cards()
            .into_iter()
            .map(|c| c.rank().value() as u32)
            .collect::<Vec<u32>>();
        match values.len() {
            0 | 1 => false,
            n => {
                let gaps = values.windows(2).map(|w| w[1] - w[0]).sum::<u32>();
                gaps <= 3 * (n as u32 - 1)
            }
        }
    }

    /// ranks of the subset from highest to lowest, the lowball comparison order
    fn descending(&self) -> Vec<Rank> {
        let mut ranks = self
            .cards()
            .into_iter()
            .map(|c| c.rank())
            .collect::<Vec<Rank>>();
        ranks.reverse();
        ranks
    }

    fn wrap(hand: Hand) -> Self {
        match hand.size() {
            4 => Self::Four(hand),
            3 => Self::Three(hand),
            2 => Self::Two(hand),
            1 => Self::One(hand),
            n => panic!("no classification of {} cards", n),
        }
    }

    fn valid(hand: Hand) -> bool {
        let mut ranks = 0u16;
        let mut suits = 0u8;
        for card in hand.into_iter() {
            let rank = u16::from(card.rank());
            let suit = 1u8 << u8::from(card.suit());
            if ranks & rank != 0 || suits & suit != 0 {
                return false;
            }
            ranks |= rank;
            suits |= suit;
        }
        true
    }
}

/// classification enumerates every non-empty subset of the (at most 4)
/// dealt cards and keeps the best valid one under Ord
impl From<Hand> for Classification {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() >= 1, "cannot classify an empty hand");
        assert!(hand.size() <= 4, "badugi hands hold at most 4 cards");
        let cards = Vec::<Card>::from(hand);
        (1u8..1 << cards.len())
            .map(|mask| {
                cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, c)| Hand::from(*c))
                    .fold(Hand::empty(), Hand::add)
            })
            .filter(|subset| Self::valid(*subset))
            .map(Self::wrap)
            .max()
            // unreachable for non-empty input, since any single card is
            // a valid subset; fall back to the lowest card regardless
            .unwrap_or_else(|| {
                Self::One(Hand::from(hand.lowest().expect("non-empty hand")))
            })
    }
}

/// larger subsets always win; equal sizes fall through to comparing
/// ranks from the top down, where the lower rank is the better low.
/// suits never matter, so rank-identical hands are exactly tied.
impl Ord for Classification {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.size().cmp(&other.size()).then_with(|| {
            self.descending()
                .into_iter()
                .zip(other.descending())
                .map(|(ours, theirs)| theirs.cmp(&ours))
                .find(|ord| *ord != std::cmp::Ordering::Equal)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Classification {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Eq for Classification {}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Four(h) => write!(f, "Badugi    {}", h),
            Self::Three(h) => write!(f, "ThreeCard {}", h),
            Self::Two(h) => write!(f, "TwoCard   {}", h),
            Self::One(h) => write!(f, "OneCard   {}", h),
        }
    }
}
