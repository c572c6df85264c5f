//! Random undirected graph generation.
//!
//! Every unordered pair `i < j` receives one fair coin flip, written to both
//! `(i, j)` and `(j, i)`. The diagonal is never touched. Graphs are not
//! guaranteed to be connected.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::graph::matrix::AdjacencyMatrix;

/// Fill an `n`-vertex matrix with one random bit per unordered pair.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> AdjacencyMatrix {
    let mut matrix = AdjacencyMatrix::empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let bit = u8::from(rng.gen_bool(0.5));
            matrix.set_pair(i, j, bit);
        }
    }
    matrix
}

/// Seed derived from the wall clock, in nanoseconds since the Unix epoch.
///
/// Falls back to 0 if the clock reads before the epoch.
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

/// Graph generator owning its random source.
///
/// The seed is kept so a run can be reproduced.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    seed: u64,
    rng: StdRng,
}

impl GraphGenerator {
    /// Generator with an explicit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded once from the wall clock.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random symmetric matrix over `n` vertices.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn generate(&mut self, n: usize) -> AdjacencyMatrix {
        let matrix = generate(n, &mut self.rng);
        debug!(edges = matrix.edge_count(), "generated graph");
        matrix
    }
}
