//! Small-range random helpers over an injected RNG
//!
//! All randomness in the renderer is cosmetic, so the modulo bias of these
//! helpers is irrelevant; what matters is that every call site takes the RNG
//! as a parameter and stays deterministic under a fixed test generator.

use rand_core::RngCore;

/// Uniform-ish value in `[lo, hi)`. `hi` must be greater than `lo`.
pub fn range(rng: &mut impl RngCore, lo: i32, hi: i32) -> i32 {
    debug_assert!(lo < hi);
    let span = (hi - lo) as u32;
    lo + (rng.next_u32() % span) as i32
}

/// Bernoulli trial: true with roughly `percent` in 100 odds.
pub fn chance(rng: &mut impl RngCore, percent: u32) -> bool {
    (rng.next_u32() % 100) < percent
}
