//! Error types for the `chaintable` crate

/// Errors that could occur while building a [`crate::FixedHashTable`]
///
/// Everyday outcomes are not errors: a full table rejects new keys by
/// returning `false` from [`crate::FixedHashTable::set()`], and a missing
/// key is reported as `None`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity was zero.
    ///
    /// A table needs at least one bucket to hash into, and its capacity is
    /// also the maximum number of distinct keys it will hold.
    #[error("capacity of hash table must be greater than 0")]
    InvalidCapacity,
}
