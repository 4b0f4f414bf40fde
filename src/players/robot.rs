use super::Player;
use crate::play::action::Action;
use crate::play::table::Table;
use crate::strategy::engine;
use crate::strategy::engine::Decision;
use crate::strategy::profile::Profile;

/// A computer seat: a fixed personality wrapping the stateless decision
/// engine. The identity is persistent, so the same seat plays the same
/// personality across every hand.
#[derive(Debug)]
pub struct Robot {
    profile: &'static Profile,
}

impl Robot {
    pub fn new(identity: usize) -> Self {
        Self {
            profile: Profile::of(identity),
        }
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }
}

impl Player for Robot {
    /// resolve the engine's decision label into a concrete action:
    /// call becomes check when nothing is owed, raises are sized by the
    /// fixed limit and shoved short when the stack cannot cover
    fn act(&self, table: &Table, position: usize) -> Action {
        if table.phase().is_drawing() {
            return Action::Draw(engine::discards(table, position));
        }
        let owed = table.to_call(position);
        let stack = table.seat(position).stack();
        match engine::decide(table, position, self.profile) {
            Decision::Fold if owed == 0 => Action::Check,
            Decision::Fold => Action::Fold,
            Decision::Call if owed == 0 => Action::Check,
            Decision::Call => Action::Call(owed.min(stack)),
            Decision::Raise => match (owed + table.stake_size()).min(stack) {
                amount if amount > owed.min(stack) => Action::Raise(amount),
                amount => Action::Call(amount),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::play::phase::Phase;
    use crate::play::seat::Seat;

    fn seat(position: usize, cards: &str) -> Seat {
        let mut seat = Seat::new(position, 1000);
        seat.set_cards(Hand::from(cards));
        seat
    }

    #[test]
    fn stable_personality() {
        assert!(Robot::new(2).profile() == Robot::new(8).profile());
    }

    #[test]
    fn never_folds_for_free() {
        // a hopeless hand checks rather than folds when nothing is owed
        let mut seats = vec![
            seat(0, "Ac Ad Ah As"),
            seat(1, "5c 6d 7h 8s"),
            seat(2, "9c Td Jh Qs"),
        ];
        for s in seats.iter_mut() {
            s.record_draw(0, 1);
        }
        let table = Table::snapshot(seats, 60, 0, 0, 0, Phase::PostOne);
        let action = Robot::new(0).act(&table, 0);
        assert!(action != Action::Fold);
    }

    #[test]
    fn draw_turns_produce_draws() {
        let seats = vec![seat(0, "Ac Ad 2h 3s"), seat(1, "5c 6d 7h 8s")];
        let table = Table::snapshot(seats, 30, 0, 0, 0, Phase::DrawOne);
        match Robot::new(0).act(&table, 0) {
            Action::Draw(hand) => assert!(hand.size() == 1),
            _ => panic!("expected a draw"),
        }
    }
}
