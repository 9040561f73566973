//! Stored-filename generation.
//!
//! Stored names are `{epoch_millis}-{random}_{original}`: unique with
//! overwhelming probability, no collision check. A theoretical collision
//! silently overwrites an existing file.

use chrono::Utc;
use rand::Rng;

/// Upper bound (exclusive) for the random filename component.
const RANDOM_BOUND: u32 = 1_000_000_000;

/// Compose a stored filename from its parts. Deterministic; the
/// entropy comes from the caller.
pub fn compose(epoch_millis: i64, random: u32, original: &str) -> String {
    format!("{}-{}_{}", epoch_millis, random, original)
}

/// Generate a stored filename for `original` using the current time and
/// a fresh random component.
pub fn generate(original: &str) -> String {
    let random = rand::rng().random_range(0..RANDOM_BOUND);
    compose(Utc::now().timestamp_millis(), random, original)
}
