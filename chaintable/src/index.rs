//! Bucket index function
//!
//! Keys are hashed with Dan Bernstein's djb2: start from 5381 and, for each
//! character in order, multiply by 33 and add the character's Unicode code
//! point. The bucket is that sum modulo the table capacity.
//!
//! The textbook sum is unbounded, so rather than letting a fixed-width
//! accumulator wrap we reduce it modulo the capacity after every character.
//! Since `(a * 33 + c) mod m == ((a mod m) * 33 + c) mod m`, the result is
//! exactly the index the unbounded sum would give, for any key length. Each
//! step is computed in `u128`: the reduced accumulator is below `usize::MAX`,
//! so `acc * 33 + char::MAX` cannot overflow.

use std::num::NonZeroUsize;

/// Initial accumulator value for djb2
const SEED: u32 = 5381;

/// Multiplier applied to the accumulator before each character
const MULTIPLIER: u128 = 33;

/// Map a key to a bucket index in `0..capacity`.
///
/// The empty key maps to `5381 % capacity`.
pub fn bucket_index(key: &str, capacity: NonZeroUsize) -> usize {
    let modulus = capacity.get() as u128;
    let reduced = key.chars().fold(u128::from(SEED) % modulus, |acc, c| {
        (acc * MULTIPLIER + u128::from(u32::from(c))) % modulus
    });
    // Always below `capacity`, which is itself a usize.
    reduced as usize
}
