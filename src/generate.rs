//! Demo sequence generation
//!
//! The engine itself accepts any ordered elements; this module only
//! feeds the demo driver. A seeded ChaCha generator keeps demo runs
//! reproducible, so the same seed always walks the same steps.

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

pub const MIN_SEQUENCE_LENGTH: usize = 1;

/// Value cap for short sequences; small values keep the bar chart readable.
pub const SMALL_SEQUENCE_MAX_VALUE: u32 = 30;

/// Value cap for sequences of 50 or more elements.
pub const LARGE_SEQUENCE_MAX_VALUE: u32 = 100;

/// Generate `len` random values in `1..=cap` from `seed`.
///
/// Sequences under 50 elements draw from the smaller cap, matching the
/// rendering-friendly ranges the demo has always used.
pub fn random_sequence(len: usize, seed: u64) -> Vec<u32> {
    let cap = if len < 50 {
        SMALL_SEQUENCE_MAX_VALUE
    } else {
        LARGE_SEQUENCE_MAX_VALUE
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u32() % cap + 1).collect()
}
