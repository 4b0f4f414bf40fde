//! Table Demo Binary
//!
//! Deals seeded hands of fixed-limit Badugi between six computer
//! personalities and logs every action to terminal and file.

use clap::Parser;
use robodugi::Chips;
use robodugi::play::engine::Engine;
use robodugi::players::robot::Robot;
use std::rc::Rc;

#[derive(Parser)]
#[command(about = "computer-vs-computer badugi table")]
struct Args {
    /// number of hands to deal
    #[arg(long, default_value_t = 100)]
    hands: u32,
    /// seats at the table
    #[arg(long, default_value_t = 6)]
    players: usize,
    /// starting stack per seat
    #[arg(long, default_value_t = 1000)]
    stack: Chips,
    /// deck seed; the same seed replays the same session
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    robodugi::log();
    let args = Args::parse();
    anyhow::ensure!(
        (2..=6).contains(&args.players),
        "the table seats 2 to 6 players"
    );
    let mut engine = Engine::new(args.seed);
    for identity in 0..args.players {
        engine.gain_seat(args.stack, Rc::new(Robot::new(identity)));
    }
    engine.play(args.hands);
    Ok(())
}
