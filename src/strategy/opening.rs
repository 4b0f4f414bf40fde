use super::position::Position;
use crate::cards::rank::Rank;

/// Baseline action for an opening decision, before personality adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Fold,
    Call,
    Raise,
}

/// One cell of the opening-range table.
#[derive(Debug, Clone, Copy)]
pub struct Criteria {
    /// the hand's highest rank must not exceed this (after tightness scaling)
    pub threshold: Rank,
    /// drawing hands must additionally be smooth to play
    pub smooth: bool,
    pub baseline: Baseline,
}

/// Static opening-range table keyed by (position, classification size).
/// No entry means the hand is an open-fold from that position.
pub const fn criteria(position: Position, size: usize) -> Option<Criteria> {
    match (position, size) {
        (Position::Early, 4) => entry(Rank::Ten, false, Baseline::Raise),
        (Position::Early, 3) => entry(Rank::Five, true, Baseline::Call),
        (Position::Middle, 4) => entry(Rank::Queen, false, Baseline::Raise),
        (Position::Middle, 3) => entry(Rank::Seven, true, Baseline::Call),
        (Position::Late, 4) => entry(Rank::King, false, Baseline::Raise),
        (Position::Late, 3) => entry(Rank::Nine, false, Baseline::Raise),
        (Position::Late, 2) => entry(Rank::Four, true, Baseline::Call),
        _ => None,
    }
}

const fn entry(threshold: Rank, smooth: bool, baseline: Baseline) -> Option<Criteria> {
    Some(Criteria {
        threshold,
        smooth,
        baseline,
    })
}
