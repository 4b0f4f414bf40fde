criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_a_dealt_hand,
        scoring_breakability,
        deciding_a_post_draw_turn,
}

fn classifying_a_dealt_hand(c: &mut criterion::Criterion) {
    c.bench_function("classify a 4-card Hand", |b| {
        let hand = Hand::from("Ac 2d 8h 8s");
        b.iter(|| Classification::from(hand))
    });
}

fn scoring_breakability(c: &mut criterion::Criterion) {
    c.bench_function("score a made badugi for breaking", |b| {
        let class = Classification::from(Hand::from("9c Td Jh Qs"));
        b.iter(|| Breakability::from(class))
    });
}

/// the whole decision must land well under a millisecond
fn deciding_a_post_draw_turn(c: &mut criterion::Criterion) {
    let mut seats = vec![
        Seat::new(0, 1000),
        Seat::new(1, 1000),
        Seat::new(2, 1000),
    ];
    seats[0].set_cards(Hand::from("Ac 2d 3h 9s"));
    seats[1].set_cards(Hand::from("5c 6d 7h 8s"));
    seats[2].set_cards(Hand::from("9c Td Jh Qs"));
    for seat in seats.iter_mut() {
        seat.record_draw(0, 1);
    }
    let table = Table::snapshot(seats, 120, 20, 1, 0, Phase::PostOne);
    c.bench_function("decide a post-draw betting turn", |b| {
        b.iter(|| engine::decide(&table, 0, Profile::of(0)))
    });
}

use robodugi::cards::hand::Hand;
use robodugi::evaluation::breakability::Breakability;
use robodugi::evaluation::classify::Classification;
use robodugi::play::phase::Phase;
use robodugi::play::seat::Seat;
use robodugi::play::table::Table;
use robodugi::strategy::engine;
use robodugi::strategy::profile::Profile;
