use crate::Chips;
use crate::Probability;

/// splitmix64 increment; fixed so identical states always hash identically
const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic stand-in for randomness.
///
/// Folds the authoritative chip state of the current decision into a
/// value in [0, 1). Identical snapshots always produce the identical
/// draw, which makes "randomized" branches replayable and testable
/// without any entropy source.
pub fn fraction(pot: Chips, stack: Chips, bet: Chips) -> Probability {
    let seed = (pot as u64)
        .wrapping_mul(GAMMA)
        .wrapping_add((stack as u64).rotate_left(21))
        .wrapping_add((bet as u64).rotate_left(42));
    // f32 carries 24 mantissa bits, so take the top 24 of the mix
    (mix(seed) >> 40) as Probability / (1u64 << 24) as Probability
}

/// splitmix64 finalizer
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(GAMMA);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}
