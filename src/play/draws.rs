/// Per-hand record of how many cards a seat took in each of the three
/// draw rounds. Zeroed at the start of every hand; written exactly once
/// per round by the table when the seat acts; standing pat is an explicit
/// zero. The decision engine only ever reads it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Draws([u8; 3]);

impl Draws {
    pub fn empty() -> Self {
        Self([0; 3])
    }

    pub fn count(&self, round: usize) -> u8 {
        self.0[round]
    }

    pub fn record(&mut self, round: usize, n: u8) {
        assert!(n <= 4, "a badugi hand holds four cards");
        self.0[round] = n;
    }
}

impl std::fmt::Display for Draws {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.0[0], self.0[1], self.0[2])
    }
}
