/// Coarse seat position relative to the dealer, recomputed every decision
/// since the active-player count shrinks as seats fold.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Position {
    Early,
    Middle,
    Late,
}

impl Position {
    /// the first ceil(n/3) relative offsets act early, the last floor(n/3)
    /// act late, and whatever is left in between is middle.
    /// all-in players still occupy a seat for rotation purposes, so the
    /// active count excludes folded seats only.
    pub fn from_seats(seat: usize, dealer: usize, actives: usize) -> Self {
        assert!(actives >= 2, "position needs at least two active players");
        let relative = (seat as isize - dealer as isize).rem_euclid(actives as isize) as usize;
        let early = actives.div_ceil(3);
        let late = actives * 2 / 3;
        if relative < early {
            Self::Early
        } else if relative >= late {
            Self::Late
        } else {
            Self::Middle
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Early => write!(f, "early"),
            Self::Middle => write!(f, "middle"),
            Self::Late => write!(f, "late"),
        }
    }
}
