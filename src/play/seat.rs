use super::draws::Draws;
use crate::Chips;
use crate::cards::hand::Hand;
use colored::Colorize;

#[derive(Debug, Clone, Copy)]
pub struct Seat {
    position: usize,
    cards: Hand,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    state: State,
    draws: Draws,
}

impl Seat {
    pub fn new(position: usize, stack: Chips) -> Seat {
        Seat {
            position,
            stack,
            stake: 0,
            spent: 0,
            state: State::Playing,
            cards: Hand::empty(),
            draws: Draws::empty(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
    pub fn cards(&self) -> Hand {
        self.cards
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// chips committed in the current betting round
    pub fn stake(&self) -> Chips {
        self.stake
    }
    /// chips committed over the whole hand
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn draws(&self) -> &Draws {
        &self.draws
    }

    pub fn win(&mut self, win: Chips) {
        self.stack += win;
    }
    pub fn bet(&mut self, bet: Chips) {
        assert!(bet <= self.stack);
        self.stack -= bet;
        self.stake += bet;
        self.spent += bet;
        if self.stack == 0 {
            self.state = State::Shoving;
        }
    }
    pub fn fold(&mut self) {
        self.state = State::Folding;
    }
    pub fn set_cards(&mut self, cards: Hand) {
        self.cards = cards;
    }
    pub fn record_draw(&mut self, round: usize, n: u8) {
        self.draws.record(round, n);
    }
    /// betting round boundary
    pub fn clear_stake(&mut self) {
        self.stake = 0;
    }
    /// hand boundary: cards, draws, and commitments reset; busted seats sit out
    pub fn reset(&mut self) {
        self.cards = Hand::empty();
        self.draws = Draws::empty();
        self.stake = 0;
        self.spent = 0;
        self.state = if self.stack > 0 {
            State::Playing
        } else {
            State::Folding
        };
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format!("{:>4}", self.stack).green(),
            self.cards,
            self.draws,
            self.state,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Playing,
    Shoving,
    Folding,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Playing => write!(f, "{}", "P".green()),
            State::Shoving => write!(f, "{}", "S".yellow()),
            State::Folding => write!(f, "{}", "F".red()),
        }
    }
}
