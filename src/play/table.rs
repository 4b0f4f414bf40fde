use super::action::Action;
use super::phase::Phase;
use super::seat::{Seat, State};
use crate::Chips;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::evaluation::classify::Classification;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The table owns the full game state between actions: seats, pot,
/// outstanding bet, raise count, phase, deck, and muck. Its immutable
/// surface is everything the decision engine is allowed to see; the
/// mutable surface belongs to the hand loop.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<Seat>,
    pot: Chips,
    bet: Chips,
    raises: usize,
    dealer: usize,
    big_blind: usize,
    phase: Phase,
    deck: Deck,
    muck: Hand,
    rng: SmallRng,
    sblind: Chips,
    bblind: Chips,
}

impl Table {
    /// per-round raise cap, the fixed-limit convention
    pub const CAP: usize = 4;

    pub fn new(seed: u64) -> Self {
        Self {
            seats: Vec::new(),
            pot: 0,
            bet: 0,
            raises: 0,
            dealer: 0,
            big_blind: 0,
            phase: Phase::PreDraw,
            deck: Deck::new(),
            muck: Hand::empty(),
            rng: SmallRng::seed_from_u64(seed),
            sblind: 10,
            bblind: 20,
        }
    }

    /// assemble an arbitrary mid-hand state, letting tests and benches
    /// pose exact scenarios without dealing through a whole hand
    pub fn snapshot(
        seats: Vec<Seat>,
        pot: Chips,
        bet: Chips,
        raises: usize,
        dealer: usize,
        phase: Phase,
    ) -> Self {
        let dealt = seats
            .iter()
            .map(|s| s.cards())
            .fold(Hand::empty(), Hand::add);
        let big_blind = (dealer + 2) % seats.len().max(1);
        Self {
            deck: Deck::from(dealt.complement()),
            muck: Hand::empty(),
            rng: SmallRng::seed_from_u64(0),
            sblind: 10,
            bblind: 20,
            seats,
            pot,
            bet,
            raises,
            dealer,
            big_blind,
            phase,
        }
    }

    pub fn sit(&mut self, stack: Chips) {
        let position = self.seats.len();
        self.seats.push(Seat::new(position, stack));
    }

    //  read surface for the decision engine

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn raises(&self) -> usize {
        self.raises
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: usize) -> &Seat {
        &self.seats[position]
    }
    /// folded seats are out; all-in seats still occupy a rotation slot
    pub fn active_players(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.state() != State::Folding)
            .count()
    }
    pub fn opponents(&self, position: usize) -> impl Iterator<Item = &Seat> {
        self.seats
            .iter()
            .filter(move |s| s.position() != position)
            .filter(|s| s.state() != State::Folding)
    }
    pub fn to_call(&self, position: usize) -> Chips {
        self.bet.saturating_sub(self.seat(position).stake())
    }
    /// fixed-limit sizing: small bet for the first two betting rounds,
    /// big bet after the second draw
    pub fn stake_size(&self) -> Chips {
        match self.phase.betting_round() {
            0 | 1 => self.bblind,
            _ => self.bblind * 2,
        }
    }

    //  mutation, owned by the hand loop

    pub fn begin_hand(&mut self) {
        assert!(self.seats.len() >= 2, "a hand needs two seats");
        for seat in self.seats.iter_mut() {
            seat.reset();
        }
        self.dealer = self.next_playing(self.dealer);
        self.pot = 0;
        self.bet = 0;
        self.raises = 0;
        self.phase = Phase::PreDraw;
        self.deck = Deck::new();
        self.muck = Hand::empty();
        for position in 0..self.seats.len() {
            if self.seats[position].state() == State::Playing {
                let cards = self.deck.deal(4, &mut self.rng);
                self.seats[position].set_cards(cards);
            }
        }
        self.post_blinds();
    }

    /// heads-up the dealer posts the small blind; otherwise blinds sit
    /// immediately left of the button
    fn post_blinds(&mut self) {
        let small = match self.playing() {
            2 => self.dealer,
            _ => self.next_playing(self.dealer),
        };
        let big = self.next_playing(small);
        self.big_blind = big;
        self.apply(small, Action::Blind(self.sblind.min(self.seats[small].stack())));
        self.apply(big, Action::Blind(self.bblind.min(self.seats[big].stack())));
    }

    pub fn apply(&mut self, position: usize, action: Action) {
        match action {
            Action::Fold => self.seats[position].fold(),
            Action::Check => {}
            Action::Call(amount) | Action::Blind(amount) => {
                self.seats[position].bet(amount);
                self.pot += amount;
                self.bet = self.bet.max(self.seats[position].stake());
            }
            Action::Raise(amount) => {
                assert!(self.raises < Self::CAP, "raise past the cap");
                self.seats[position].bet(amount);
                self.pot += amount;
                self.bet = self.bet.max(self.seats[position].stake());
                self.raises += 1;
            }
            Action::Draw(discards) => self.draw(position, discards),
        }
    }

    fn draw(&mut self, position: usize, discards: Hand) {
        let round = self.phase.draw_round();
        let kept = self.seats[position].cards().minus(discards);
        assert!(
            kept.size() + discards.size() == 4,
            "discards must come from the hand"
        );
        let n = discards.size();
        self.muck = Hand::add(self.muck, discards);
        self.recycle(n);
        let replacements = self.deck.deal(n, &mut self.rng);
        self.seats[position].set_cards(Hand::add(kept, replacements));
        self.seats[position].record_draw(round, n as u8);
    }

    /// three draw rounds can outrun a 52-card deck, so the muck is
    /// shuffled back in when replacements run short
    fn recycle(&mut self, needed: usize) {
        if self.deck.size() < needed {
            self.deck = Deck::from(Hand::add(Hand::from(self.deck), self.muck));
            self.muck = Hand::empty();
        }
    }

    pub fn advance(&mut self) {
        self.phase = self.phase.next();
        self.bet = 0;
        self.raises = 0;
        for seat in self.seats.iter_mut() {
            seat.clear_stake();
        }
    }

    /// positions in acting order for the current phase, skipping seats
    /// that cannot act. pre-draw action starts left of the big blind,
    /// every later round left of the button.
    pub fn order(&self) -> Vec<usize> {
        let n = self.seats.len();
        let start = match self.phase {
            Phase::PreDraw => self.big_blind + 1,
            _ => self.dealer + 1,
        };
        (0..n)
            .map(|i| (start + i) % n)
            .filter(|p| self.seats[*p].state() == State::Playing)
            .collect()
    }

    /// award the pot to the best classification among the seats still in,
    /// splitting ties evenly with odd chips going left of the button
    /// TODO: side pots for short all-ins
    pub fn settle(&mut self) -> Vec<(usize, Chips)> {
        let contenders = self
            .seats
            .iter()
            .filter(|s| s.state() != State::Folding)
            .map(|s| s.position())
            .collect::<Vec<usize>>();
        assert!(!contenders.is_empty(), "someone must win the pot");
        let best = contenders
            .iter()
            .map(|p| Classification::from(self.seats[*p].cards()))
            .max()
            .expect("non-empty contenders");
        let mut winners = contenders
            .into_iter()
            .filter(|p| Classification::from(self.seats[*p].cards()) == best)
            .collect::<Vec<usize>>();
        let n = self.seats.len();
        winners.sort_by_key(|p| (p + n - self.dealer - 1) % n);
        let share = self.pot / winners.len() as Chips;
        let mut remainder = self.pot % winners.len() as Chips;
        let mut payouts = Vec::new();
        for position in winners {
            let extra = if remainder > 0 { 1 } else { 0 };
            remainder = remainder.saturating_sub(1);
            self.seats[position].win(share + extra);
            payouts.push((position, share + extra));
        }
        self.pot = 0;
        payouts
    }

    fn playing(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.state() == State::Playing)
            .count()
    }

    fn next_playing(&self, from: usize) -> usize {
        let n = self.seats.len();
        (1..=n)
            .map(|i| (from + i) % n)
            .find(|p| self.seats[*p].state() == State::Playing)
            .expect("at least one seat can play")
    }
}
