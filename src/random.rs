use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The single random stream of a run.
///
/// Every sampling step and every probabilistic acceptance draws from the same
/// handle in visitation order, so a fixed seed replays the exact same run.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    pub fn next_int(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
