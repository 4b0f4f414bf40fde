use crate::Chips;
use crate::cards::hand::Hand;
use colored::*;

/// What a seat did on its turn. Call covers calls of any outstanding bet;
/// Check is the zero-owed case, resolved by the actor. Draw carries the
/// discard set, which may be empty for standing pat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Raise(Chips),
    Blind(Chips),
    Draw(Hand),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Blind(amount) => write!(f, "{}", format!("BLIND {}", amount).white()),
            Action::Call(amount) => write!(f, "{}", format!("CALL  {}", amount).yellow()),
            Action::Raise(amount) => write!(f, "{}", format!("RAISE {}", amount).green()),
            Action::Draw(hand) if hand.size() == 0 => write!(f, "{}", "PAT".white()),
            Action::Draw(hand) => write!(f, "{}", format!("DRAW  {}", hand).white()),
        }
    }
}
