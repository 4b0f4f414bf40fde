/// A badugi hand alternates four betting rounds with three draw rounds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    PreDraw = 0,
    DrawOne = 1,
    PostOne = 2,
    DrawTwo = 3,
    PostTwo = 4,
    DrawThree = 5,
    PostThree = 6,
}

impl Phase {
    pub const fn next(&self) -> Self {
        match self {
            Self::PreDraw => Self::DrawOne,
            Self::DrawOne => Self::PostOne,
            Self::PostOne => Self::DrawTwo,
            Self::DrawTwo => Self::PostTwo,
            Self::PostTwo => Self::DrawThree,
            Self::DrawThree => Self::PostThree,
            Self::PostThree => panic!("terminal"),
        }
    }

    pub const fn is_betting(&self) -> bool {
        matches!(
            self,
            Self::PreDraw | Self::PostOne | Self::PostTwo | Self::PostThree
        )
    }
    pub const fn is_drawing(&self) -> bool {
        !self.is_betting()
    }

    /// 0..=3, indexing into the fixed-limit bet sizing
    pub const fn betting_round(&self) -> usize {
        match self {
            Self::PreDraw => 0,
            Self::PostOne => 1,
            Self::PostTwo => 2,
            Self::PostThree => 3,
            _ => panic!("not a betting round"),
        }
    }

    /// 0..=2, which draw round is being acted on
    pub const fn draw_round(&self) -> usize {
        match self {
            Self::DrawOne => 0,
            Self::DrawTwo => 1,
            Self::DrawThree => 2,
            _ => panic!("not a draw round"),
        }
    }

    /// the most recently completed draw round, the primary
    /// opponent-strength signal for every post-draw read
    pub const fn last_draw(&self) -> Option<usize> {
        match self {
            Self::PreDraw | Self::DrawOne => None,
            Self::PostOne | Self::DrawTwo => Some(0),
            Self::PostTwo | Self::DrawThree => Some(1),
            Self::PostThree => Some(2),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PreDraw => write!(f, "pre-draw"),
            Self::DrawOne => write!(f, "first draw"),
            Self::PostOne => write!(f, "post-first"),
            Self::DrawTwo => write!(f, "second draw"),
            Self::PostTwo => write!(f, "post-second"),
            Self::DrawThree => write!(f, "third draw"),
            Self::PostThree => write!(f, "post-third"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternation() {
        let mut phase = Phase::PreDraw;
        let mut bets = 0;
        let mut draws = 0;
        loop {
            if phase.is_betting() {
                bets += 1;
            } else {
                draws += 1;
            }
            if phase == Phase::PostThree {
                break;
            }
            phase = phase.next();
        }
        assert!(bets == 4);
        assert!(draws == 3);
    }

    #[test]
    fn draw_signals_lag_by_one() {
        assert!(Phase::PreDraw.last_draw().is_none());
        assert!(Phase::DrawOne.last_draw().is_none());
        assert!(Phase::PostOne.last_draw() == Some(0));
        assert!(Phase::DrawTwo.last_draw() == Some(0));
        assert!(Phase::PostThree.last_draw() == Some(2));
    }
}
