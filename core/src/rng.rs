//! Deterministic random number generation for sample data.
//!
//! RULE: the generator never calls a platform RNG. Every draw flows
//! through a SampleRng seeded from the user-supplied seed, so the same
//! seed always produces the same file.
//!
//! Each (branch, product) pair gets its own stream, derived from
//! (seed XOR stream_index). Adding a branch or product never changes
//! the rows of the pairs that came before it.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct SampleRng {
    inner: Pcg64Mcg,
}

impl SampleRng {
    pub fn new(seed: u64, stream_index: u64) -> Self {
        let derived_seed = seed ^ stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [-amplitude, amplitude).
    pub fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * amplitude
    }
}
