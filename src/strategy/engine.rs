use super::chance;
use super::opening;
use super::opening::Baseline;
use super::position::Position;
use super::profile::Profile;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::evaluation::breakability::Breakability;
use crate::evaluation::classify::Classification;
use crate::play::phase::Phase;
use crate::play::seat::{Seat, State};
use crate::play::table::Table;

/// a made hand this low value-bets; anything rougher is a break candidate
const CUTOFF: Rank = Rank::Eight;
/// minimum breakability score before a rough badugi is worth breaking.
/// a smooth nine like A-2-3-9 scores 50 and stays pat; 9-T-J-Q scores 77
const BREAK_FLOOR: u8 = 60;
/// estimated outs by cards still needed, for the pot-odds continue rule
const OUTS: [f32; 3] = [10.0, 20.0, 30.0];

/// The label a betting decision resolves to. Call covers check when
/// nothing is owed; the actor maps the label onto a concrete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fold,
    Call,
    Raise,
}

/// One betting decision, a pure function of the table snapshot.
///
/// No state survives between invocations; identical snapshots produce
/// identical decisions, including on the "randomized" branches, which
/// draw from the deterministic chance hash of the chip state.
pub fn decide(table: &Table, position: usize, profile: &Profile) -> Decision {
    let seat = table.seat(position);
    assert!(
        seat.state() != State::Folding,
        "a folded seat has no decision"
    );
    match table.phase() {
        Phase::PreDraw => open(table, seat, profile),
        phase if phase.is_betting() => carry(table, seat, profile),
        phase => panic!("no betting decision during {}", phase),
    }
}

/// Discard selection for a draw turn: keep the best valid subset and
/// draw at the rest, unless the hand is a made badugi being broken, in
/// which case exactly its highest card goes. The break predicate is
/// recomputed from the same snapshot the betting round saw, so the two
/// routines agree without any carried flag.
pub fn discards(table: &Table, position: usize) -> Hand {
    let seat = table.seat(position);
    assert!(
        seat.state() != State::Folding,
        "a folded seat has no draw"
    );
    assert!(
        table.phase().is_drawing(),
        "no discard selection during {}",
        table.phase()
    );
    let class = Classification::from(seat.cards());
    if breaking(table, seat, class) {
        let card = Breakability::from(class)
            .discard()
            .expect("made badugi has a break card");
        log::debug!("seat {} breaks {}", position, card);
        Hand::from(card)
    } else {
        seat.cards().minus(class.cards())
    }
}

/// pre-draw: opening-range table lookup, tightness-scaled threshold,
/// smoothness gate, then the baseline action
fn open(table: &Table, seat: &Seat, profile: &Profile) -> Decision {
    let class = Classification::from(seat.cards());
    let position = Position::from_seats(seat.position(), table.dealer(), table.active_players());
    let Some(criteria) = opening::criteria(position, class.size()) else {
        return Decision::Fold;
    };
    // tightness scales the hand's high card before the threshold test,
    // so factors above 1 demand a stronger (lower) high card
    if class.high().value() as f32 * profile.tightness > criteria.threshold.value() as f32 {
        log::debug!("seat {} too rough to open from {}", seat.position(), position);
        return Decision::Fold;
    }
    if criteria.smooth && !class.is_smooth() {
        return Decision::Fold;
    }
    match criteria.baseline {
        Baseline::Fold => Decision::Fold,
        Baseline::Call => Decision::Call,
        Baseline::Raise => spice(table, seat, profile),
    }
}

/// every betting round after a draw
fn carry(table: &Table, seat: &Seat, profile: &Profile) -> Decision {
    let class = Classification::from(seat.cards());

    // unambiguous value bet: every live opponent drew strictly more
    // than we did in the round just completed
    if table.raises() < Table::CAP && outdrawn(table, seat) {
        log::debug!("seat {} value-bets the draw read", seat.position());
        return Decision::Raise;
    }

    // snow: a three-card hand representing a made badugi, late rounds
    // only, and only against tables that all drew
    if class.size() == 3 && table.phase().betting_round() >= 2 && all_drew(table, seat) {
        let draw = chance::fraction(table.pot(), seat.stack(), table.bet());
        if draw < profile.bluff {
            log::debug!("seat {} snows at {:.3}", seat.position(), draw);
            return Decision::Call;
        }
    }

    if class.size() == 4 {
        if class.high() <= CUTOFF {
            return spice(table, seat, profile);
        }
        // rough badugi: call whether or not it is worth breaking.
        // the draw routine settles what actually gets thrown.
        if breaking(table, seat, class) {
            log::debug!("seat {} flags a break", seat.position());
        }
        return Decision::Call;
    }

    odds(table, seat, class)
}

/// raise with probability aggression (clamped), respecting the cap
fn spice(table: &Table, seat: &Seat, profile: &Profile) -> Decision {
    if table.raises() >= Table::CAP {
        return Decision::Call;
    }
    let draw = chance::fraction(table.pot(), seat.stack(), table.bet());
    if draw < profile.aggression.clamp(0.0, 1.0) {
        Decision::Raise
    } else {
        Decision::Call
    }
}

/// pot-odds continue rule for drawing hands
fn odds(table: &Table, seat: &Seat, class: Classification) -> Decision {
    let owed = table.bet().saturating_sub(seat.stake());
    if owed == 0 {
        return Decision::Call;
    }
    let outs = OUTS[3 - class.size().min(3)];
    let remaining = 52usize.saturating_sub(4 * table.active_players()).max(1);
    let winning = outs / remaining as f32;
    let odds = table.pot() as f32 / owed as f32;
    let required = 1.0 / (odds + 1.0);
    log::debug!(
        "seat {} draws at {:.3} needing {:.3}",
        seat.position(),
        winning,
        required
    );
    if winning >= required {
        Decision::Call
    } else {
        Decision::Fold
    }
}

/// true when every live opponent took strictly more cards than this
/// seat in the most recently completed draw. an empty comparison set
/// never fires.
fn outdrawn(table: &Table, seat: &Seat) -> bool {
    let Some(round) = table.phase().last_draw() else {
        return false;
    };
    let mine = seat.draws().count(round);
    let opponents = table.opponents(seat.position()).collect::<Vec<&Seat>>();
    !opponents.is_empty()
        && opponents
            .iter()
            .all(|o| o.draws().count(round) > mine)
}

/// true when every live opponent drew at least one card last round
fn all_drew(table: &Table, seat: &Seat) -> bool {
    let Some(round) = table.phase().last_draw() else {
        return false;
    };
    let opponents = table.opponents(seat.position()).collect::<Vec<&Seat>>();
    !opponents.is_empty()
        && opponents
            .iter()
            .all(|o| o.draws().count(round) > 0)
}

/// a rough made badugi is broken when enough of the missing-rank mass
/// is low and at least two opponents are signalling strength by
/// standing nearly pat
fn breaking(table: &Table, seat: &Seat, class: Classification) -> bool {
    if class.size() != 4 || class.high() <= CUTOFF {
        return false;
    }
    let Some(round) = table.phase().last_draw() else {
        return false;
    };
    if Breakability::from(class).score() < BREAK_FLOOR {
        return false;
    }
    let signals = table
        .opponents(seat.position())
        .filter(|o| o.draws().count(round) <= 1)
        .count();
    signals >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;

    const GRINDER: Profile = Profile {
        name: "grinder",
        aggression: 1.0,
        bluff: 0.15,
        tightness: 1.0,
    };

    fn seat(position: usize, cards: &str) -> Seat {
        let mut seat = Seat::new(position, 1000);
        seat.set_cards(Hand::from(cards));
        seat
    }

    fn drew(mut seat: Seat, round: usize, n: u8) -> Seat {
        seat.record_draw(round, n);
        seat
    }

    fn post_first(seats: Vec<Seat>, pot: Chips, bet: Chips, raises: usize) -> Table {
        Table::snapshot(seats, pot, bet, raises, 0, Phase::PostOne)
    }

    #[test]
    fn premium_value_bet() {
        // every opponent drew, we stood pat: auto raise
        let seats = vec![
            drew(seat(0, "Ac 2d 3h 4s"), 0, 0),
            drew(seat(1, "5c 6d 7h 8s"), 0, 1),
            drew(seat(2, "9c Td Jh Qs"), 0, 2),
        ];
        let table = post_first(seats, 60, 0, 0);
        assert!(decide(&table, 0, &GRINDER) == Decision::Raise);
    }

    #[test]
    fn value_bet_respects_the_cap() {
        let seats = vec![
            drew(seat(0, "Ac 2d 3h 4s"), 0, 0),
            drew(seat(1, "5c 6d 7h 8s"), 0, 1),
            drew(seat(2, "9c Td Jh Qs"), 0, 2),
        ];
        let table = post_first(seats, 60, 20, Table::CAP);
        assert!(decide(&table, 0, &GRINDER) != Decision::Raise);
    }

    #[test]
    fn no_value_bet_against_a_pat_opponent() {
        let seats = vec![
            drew(seat(0, "Ac 2d 3h 4s"), 0, 0),
            drew(seat(1, "5c 6d 7h 8s"), 0, 0),
        ];
        let table = post_first(seats, 60, 0, 0);
        // falls through to the made-hand branch instead
        assert!(decide(&table, 0, &GRINDER) != Decision::Fold);
    }

    #[test]
    fn forced_fold_on_weak_draw() {
        // three-card hand, pot 10, bet 20: pot odds 0.5 demand ~0.667
        // equity, ten outs of 24 cards offer ~0.417
        let seats = vec![
            drew(seat(0, "Ac 2d 3h 3s"), 0, 1),
            drew(seat(1, "5c 6d 7h 8s"), 0, 1),
            drew(seat(2, "9c Td Jh Qs"), 0, 1),
            drew(seat(3, "Kc Kd Kh Ks"), 0, 1),
            drew(seat(4, "Ad 2h 3c 4s"), 0, 1),
            drew(seat(5, "5d 6h 7s 8c"), 0, 1),
            drew(seat(6, "9d Th Js Qc"), 0, 1),
        ];
        let table = post_first(seats, 10, 20, 1);
        assert!(decide(&table, 0, &GRINDER) == Decision::Fold);
    }

    #[test]
    fn zero_owed_always_continues() {
        let seats = vec![
            drew(seat(0, "Ac 2d 3h 3s"), 0, 1),
            drew(seat(1, "5c 6d 7h 8s"), 0, 1),
        ];
        let table = post_first(seats, 10, 0, 0);
        assert!(decide(&table, 0, &GRINDER) == Decision::Call);
    }

    #[test]
    fn early_rough_badugi_folds_predraw() {
        let tight = Profile {
            name: "tight",
            aggression: 1.2,
            bluff: 0.10,
            tightness: 1.2,
        };
        // king-high badugi under a tightness-scaled early threshold
        let seats = vec![
            seat(0, "Kc Qd Jh Ts"),
            seat(1, "Ac 2d 3h 4s"),
            seat(2, "5c 6d 7h 8s"),
            seat(3, "Ad 2s 3c 4h"),
            seat(4, "5d 6s 7c 8h"),
            seat(5, "9c Td Jd Qs"),
        ];
        // dealer at 5 puts seat 0 one off the button: early
        let table = Table::snapshot(seats, 30, 20, 0, 5, Phase::PreDraw);
        assert!(decide(&table, 0, &tight) == Decision::Fold);
    }

    #[test]
    fn unlisted_class_open_folds() {
        // a two-card hand has no opening entry outside late position
        let seats = vec![
            seat(0, "Ac Ad As 2c"),
            seat(1, "5c 6d 7h 8s"),
            seat(2, "9c Td Jh Qs"),
            seat(3, "Kc 2d 3h 4s"),
            seat(4, "Ah 2h 3c 4d"),
            seat(5, "5h 6c 7d 8d"),
        ];
        let table = Table::snapshot(seats, 30, 20, 0, 3, Phase::PreDraw);
        assert!(decide(&table, 0, &GRINDER) == Decision::Fold);
    }

    #[test]
    fn deterministic_decisions() {
        let build = || {
            let seats = vec![
                drew(seat(0, "Ac 2d 3h 3s"), 0, 1),
                drew(seat(1, "5c 6d 7h 8s"), 0, 1),
                drew(seat(2, "9c Td Jh Qs"), 0, 1),
            ];
            Table::snapshot(seats, 120, 20, 1, 0, Phase::PostTwo)
        };
        for profile in crate::strategy::profile::PROFILES.iter() {
            assert!(decide(&build(), 0, profile) == decide(&build(), 0, profile));
        }
    }

    #[test]
    fn raise_cap_substitutes_call() {
        // a wheel badugi would raise for value, but the cap is in
        let seats = vec![
            drew(seat(0, "Ac 2d 3h 4s"), 0, 0),
            drew(seat(1, "5c 6d 7h 8s"), 0, 0),
        ];
        let table = post_first(seats, 200, 40, Table::CAP);
        assert!(decide(&table, 0, &GRINDER) == Decision::Call);
    }

    #[test]
    fn rough_badugi_calls_post_draw() {
        let seats = vec![
            drew(seat(0, "9c Td Jh Qs"), 0, 0),
            drew(seat(1, "5c 6d 7h 8s"), 0, 0),
            drew(seat(2, "Ac 2d 3h 4s"), 0, 2),
        ];
        let table = post_first(seats, 60, 20, 0);
        assert!(decide(&table, 0, &GRINDER) == Decision::Call);
    }

    #[test]
    fn breaking_discards_the_single_highest() {
        // two near-pat opponents and a rough queen badugi: break it
        let seats = vec![
            drew(seat(0, "9c Td Jh Qs"), 0, 0),
            drew(seat(1, "5c 6d 7h 8s"), 0, 0),
            drew(seat(2, "Ac 2d 3h 4s"), 0, 1),
        ];
        let table = Table::snapshot(seats, 60, 0, 0, 0, Phase::DrawTwo);
        assert!(discards(&table, 0) == Hand::from("Qs"));
    }

    #[test]
    fn smooth_badugi_stands_pat() {
        let seats = vec![
            drew(seat(0, "Ac 2d 3h 4s"), 0, 0),
            drew(seat(1, "5c 6d 7h 8s"), 0, 0),
            drew(seat(2, "9c Td Jh Qs"), 0, 1),
        ];
        let table = Table::snapshot(seats, 60, 0, 0, 0, Phase::DrawTwo);
        assert!(discards(&table, 0) == Hand::empty());
    }

    #[test]
    fn default_draw_keeps_the_best_subset() {
        let seats = vec![
            seat(0, "Ac Ad 2h 3s"),
            seat(1, "5c 6d 7h 8s"),
        ];
        let table = Table::snapshot(seats, 30, 0, 0, 0, Phase::DrawOne);
        let thrown = discards(&table, 0);
        assert!(thrown.size() == 1);
        assert!(thrown.lowest().unwrap().rank() == Rank::Ace);
    }

    #[test]
    fn snow_branch_is_deterministic() {
        let build = || {
            let seats = vec![
                drew(drew(seat(0, "Ac 2d 3h 3s"), 0, 1), 1, 1),
                drew(drew(seat(1, "5c 6d 7h 8s"), 0, 1), 1, 2),
                drew(drew(seat(2, "9c Td Jh Qs"), 0, 1), 1, 1),
            ];
            Table::snapshot(seats, 120, 980, 1, 0, Phase::PostTwo)
        };
        let first = decide(&build(), 0, &GRINDER);
        for _ in 0..10 {
            assert!(decide(&build(), 0, &GRINDER) == first);
        }
    }

    #[test]
    #[should_panic]
    fn no_decision_during_a_draw() {
        let seats = vec![seat(0, "Ac 2d 3h 4s"), seat(1, "5c 6d 7h 8s")];
        let table = Table::snapshot(seats, 30, 0, 0, 0, Phase::DrawOne);
        decide(&table, 0, &GRINDER);
    }

    #[test]
    #[should_panic]
    fn no_decision_for_a_folded_seat() {
        let mut folded = seat(0, "Ac 2d 3h 4s");
        folded.fold();
        let seats = vec![folded, seat(1, "5c 6d 7h 8s")];
        let table = Table::snapshot(seats, 30, 20, 0, 0, Phase::PreDraw);
        decide(&table, 0, &GRINDER);
    }
}
