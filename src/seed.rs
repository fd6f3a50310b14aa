//! Date-keyed seeding and the per-call random stream.
//!
//! Every generated figure is a pure function of its textual date key:
//! the key is hashed with MD5, the first 8 hex digits of the digest
//! become a 32-bit seed, and a fresh ChaCha8 stream is built from that
//! seed for the duration of a single call. MD5 is a stable,
//! well-specified hash used purely for reproducibility across platforms
//! and restarts, not for any cryptographic property.
//!
//! The ChaCha8 + gaussian draw combination is the versioned
//! implementation detail of this crate; a key maps to the same value on
//! every platform and in every run of the same release.

use md5::{Digest, Md5};
use rand::Rng;
use rand::SeedableRng;
use rand::distr::weighted::WeightedIndex;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Derives a 32-bit seed from the textual form of a date key.
///
/// Equivalent to parsing the first 8 hex digits of the MD5 hex digest as
/// a base-16 integer: those digits are the first four digest bytes,
/// big-endian.
pub fn date_seed(key: &str) -> u32 {
    let digest = Md5::digest(key.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// A function-local deterministic random stream for one generated view.
///
/// Always constructed fresh inside the call that consumes it, so
/// concurrent generation for different dates can never interleave draws.
/// The draw sequence is part of each caller's contract: reordering draws
/// changes every figure downstream.
pub struct DateRng(ChaCha8Rng);

impl DateRng {
    /// Creates a stream for a textual key, e.g. `"2025-08-05"` or
    /// `"2025-08"`.
    pub fn for_key(key: &str) -> Self {
        Self::for_seed(date_seed(key) as u64)
    }

    /// Creates a stream from an already-derived numeric seed.
    pub fn for_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// One gaussian draw. `std_dev` must be finite and positive.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        Normal::new(mean, std_dev)
            .expect("finite mean and positive std dev")
            .sample(&mut self.0)
    }

    /// Uniform integer in `[1, upper]`.
    pub fn day_in(&mut self, upper: u32) -> u32 {
        self.0.random_range(1..=upper)
    }

    /// Uniform float in `[low, high)`.
    pub fn jitter(&mut self, low: f64, high: f64) -> f64 {
        self.0.random_range(low..high)
    }

    /// One weighted categorical draw; returns the chosen index.
    pub fn pick_weighted(&mut self, weights: &[f64]) -> usize {
        WeightedIndex::new(weights)
            .expect("weights are positive and finite")
            .sample(&mut self.0)
    }
}
