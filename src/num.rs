//! Small numeric helpers shared across the dashboard.
//!
//! Randomness goes through [`rand_in_range`] with a caller-supplied RNG so
//! production code can pass `rand::thread_rng()` while tests pass a seeded
//! `StdRng` for deterministic results.

use rand::Rng;

/// Uniformly distributed integer in `[min, max]`, inclusive on both ends.
pub fn rand_in_range<R: Rng>(
    rng: &mut R,
    min: i32,
    max: i32,
) -> i32 {
    rng.gen_range(min..=max)
}

/// Restrict `value` to `[min, max]`.
#[inline]
pub const fn clamp(
    min: i32,
    value: i32,
    max: i32,
) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
