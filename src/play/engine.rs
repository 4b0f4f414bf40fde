use super::action::Action;
use super::phase::Phase;
use super::seat::State;
use super::table::Table;
use crate::Chips;
use crate::evaluation::classify::Classification;
use crate::players::Player;
use std::collections::VecDeque;
use std::rc::Rc;

/// Drives whole hands: blinds, four betting rounds, three draw rounds,
/// showdown. The table owns the state; the actors own the decisions.
pub struct Engine {
    table: Table,
    actors: Vec<Rc<dyn Player>>,
    n_hands: u32,
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        Engine {
            table: Table::new(seed),
            actors: Vec::new(),
            n_hands: 0,
        }
    }

    pub fn gain_seat(&mut self, stack: Chips, actor: Rc<dyn Player>) {
        log::info!("seat {} sits with {}", self.actors.len(), stack);
        self.table.sit(stack);
        self.actors.push(actor);
    }

    pub fn play(&mut self, hands: u32) {
        while self.n_hands < hands && self.funded() > 1 {
            self.start_hand();
            while self.has_phases() {
                match self.table.phase().is_betting() {
                    true => self.betting(),
                    false => self.drawing(),
                }
                if self.table.phase() == Phase::PostThree {
                    break;
                }
                self.table.advance();
            }
            self.end_hand();
        }
    }

    fn start_hand(&mut self) {
        log::info!("hand {}", self.n_hands);
        self.table.begin_hand();
        for seat in self.table.seats() {
            log::debug!("  {}", seat);
        }
    }

    fn end_hand(&mut self) {
        for (position, win) in self.table.settle() {
            let cards = self.table.seat(position).cards();
            log::info!(
                "seat {} wins {} with {}",
                position,
                win,
                Classification::from(cards)
            );
        }
        self.n_hands += 1;
    }

    /// one betting round: everyone in acting order, with every raise
    /// reopening the action for the seats behind it
    fn betting(&mut self) {
        let n = self.table.seats().len();
        let mut queue = VecDeque::from(self.table.order());
        while let Some(position) = queue.pop_front() {
            if self.table.active_players() <= 1 {
                break;
            }
            if self.table.seat(position).state() != State::Playing {
                continue;
            }
            let action = self.actors[position].act(&self.table, position);
            log::info!("seat {} {}", position, action);
            let raised = matches!(action, Action::Raise(_));
            self.table.apply(position, action);
            if raised {
                queue.clear();
                queue.extend(
                    (1..n)
                        .map(|i| (position + i) % n)
                        .filter(|p| self.table.seat(*p).state() == State::Playing),
                );
            }
        }
    }

    /// one draw round in acting order
    fn drawing(&mut self) {
        for position in self.table.order() {
            let action = self.actors[position].act(&self.table, position);
            log::info!("seat {} {}", position, action);
            self.table.apply(position, action);
        }
    }

    /// the hand ends early when all but one seat has folded
    fn has_phases(&self) -> bool {
        self.table.active_players() > 1
    }

    fn funded(&self) -> usize {
        self.table
            .seats()
            .iter()
            .filter(|s| s.stack() > 0)
            .count()
    }
}
