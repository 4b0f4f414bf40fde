use crate::Probability;

/// A fixed personality for a computer seat.
///
/// Aggression scales how often baseline raises actually go in, bluff is
/// the snow frequency, and tightness scales the opening threshold.
/// Profiles are constant data so tuning the table's feel is a data
/// change, not a logic change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub aggression: Probability,
    pub bluff: Probability,
    pub tightness: f32,
}

/// the six table personalities
pub const PROFILES: [Profile; 6] = [
    Profile {
        name: "rock",
        aggression: 0.80,
        bluff: 0.10,
        tightness: 1.20,
    },
    Profile {
        name: "nit",
        aggression: 0.90,
        bluff: 0.12,
        tightness: 1.10,
    },
    Profile {
        name: "grinder",
        aggression: 1.00,
        bluff: 0.15,
        tightness: 1.00,
    },
    Profile {
        name: "gambler",
        aggression: 1.10,
        bluff: 0.18,
        tightness: 0.95,
    },
    Profile {
        name: "maniac",
        aggression: 1.20,
        bluff: 0.25,
        tightness: 0.80,
    },
    Profile {
        name: "trapper",
        aggression: 0.85,
        bluff: 0.22,
        tightness: 1.15,
    },
];

impl Profile {
    /// stable identity -> personality mapping.
    /// the same seat identity resolves to the same profile in every hand.
    pub fn of(identity: usize) -> &'static Profile {
        &PROFILES[identity % PROFILES.len()]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_resolution() {
        for identity in 0..24 {
            assert!(Profile::of(identity) == Profile::of(identity + 6));
        }
    }

    #[test]
    fn factors_in_range() {
        for profile in PROFILES.iter() {
            assert!((0.8..=1.2).contains(&profile.aggression));
            assert!((0.10..=0.25).contains(&profile.bluff));
            assert!((0.8..=1.2).contains(&profile.tightness));
        }
    }
}
