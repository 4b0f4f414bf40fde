/// Badugi is a lowball game, so the Ace is the lowest rank.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    pub(crate) const fn mask() -> u16 {
        0b1111111111111
    }

    /// the Ace=1 .. King=13 numeric scale that breakability sums are defined on
    pub const fn value(&self) -> u8 {
        *self as u8 + 1
    }

    pub const fn all() -> &'static [Self] {
        &[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// With 13 ranks we only need 13 bits
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        let msb = (16 - 1 - (n & Self::mask()).leading_zeros()) as u8;
        Rank::from(msb)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// str isomorphism
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match s {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => panic!("Invalid rank str: {}", s),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
            }
        )
    }
}

impl crate::Arbitrary for Rank {
    fn random() -> Self {
        use rand::Rng;
        Rank::from(rand::rng().random_range(0..13u8))
    }
}
