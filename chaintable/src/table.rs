//! The fixed-capacity table and its builder

use crate::bucket::Bucket;
use crate::err::Error;
use crate::index;
use log::{debug, trace};
use std::fmt;
use std::num::NonZeroUsize;

/// Hash table with string keys, separate chaining and a fixed capacity
///
/// The table is created with `capacity` buckets and will hold at most
/// `capacity` distinct keys. That limit is global: a full table may still
/// have empty buckets, and a single bucket may hold many entries. Inserting
/// a new key into a full table fails, while updating an existing key always
/// succeeds.
///
/// There is no resizing. Callers that outgrow a table need to build a larger
/// one and move their entries over.
#[derive(Clone)]
pub struct FixedHashTable<V> {
    /// Number of buckets, and maximum number of distinct keys
    capacity: NonZeroUsize,

    /// Number of distinct keys currently stored
    ///
    /// Always equal to the sum of all bucket lengths.
    size: usize,

    /// Chains, indexed by [`index::bucket_index()`]
    buckets: Box<[Bucket<V>]>,
}

impl<V> FixedHashTable<V> {
    /// Create an empty table that holds up to `capacity` keys.
    ///
    /// Fails with [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        FixedHashTableBuilder::new().capacity(capacity).build()
    }

    /// Create an empty table from a capacity already known to be non-zero.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let buckets = (0..capacity.get()).map(|_| Bucket::default()).collect();
        debug!("new fixed hash table with {} buckets", capacity);
        Self {
            capacity,
            size: 0,
            buckets,
        }
    }

    /// Store `value` under `key`.
    ///
    /// An existing key has its value replaced in place. A new key is appended
    /// to its bucket's chain, unless the table is already full, in which case
    /// nothing changes and this returns `false`.
    pub fn set<K>(&mut self, key: K, value: V) -> bool
    where
        K: AsRef<str> + Into<String>,
    {
        let full = self.is_full();
        let index = self.bucket_index(key.as_ref());
        let bucket = &mut self.buckets[index];
        match bucket.replace(key.as_ref(), value) {
            Ok(()) => true,
            Err(_) if full => {
                trace!(
                    "rejected key {:?}, table is full at {} entries",
                    key.as_ref(),
                    self.size
                );
                false
            }
            Err(value) => {
                bucket.push(key.into(), value);
                self.size += 1;
                true
            }
        }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_index(key)].get(key)
    }

    /// Look up the value stored under `key` for modification in place.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index].get_mut(key)
    }

    /// Check whether `key` has a stored value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` from the table, returning the value it held.
    ///
    /// Only an exact key match removes anything; values are never searched.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let removed = self.buckets[index].remove(key)?;
        self.size -= 1;
        trace!("removed key {:?} from bucket {}", key, index);
        Some(removed)
    }

    /// Load factor, the ratio of stored keys to capacity.
    ///
    /// Always within `0.0 ..= 1.0`.
    pub fn load(&self) -> f64 {
        self.size as f64 / self.capacity.get() as f64
    }

    /// Maximum number of distinct keys, also the number of buckets
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of distinct keys currently stored
    pub fn len(&self) -> usize {
        self.size
    }

    /// True if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// True if a new key would be rejected by [`Self::set()`].
    pub fn is_full(&self) -> bool {
        self.size == self.capacity.get()
    }

    /// Index of the bucket that `key` hashes to.
    pub fn bucket_index(&self, key: &str) -> usize {
        index::bucket_index(key, self.capacity)
    }

    /// Entries of one bucket, in chain order.
    ///
    /// Returns `None` if `index` is not below [`Self::capacity()`].
    pub fn bucket(&self, index: usize) -> Option<impl Iterator<Item = (&str, &V)>> {
        self.buckets.get(index).map(|bucket| bucket.iter())
    }

    /// Chain length of every bucket, in bucket order.
    pub fn bucket_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|bucket| bucket.len())
    }

    /// Visit every entry.
    ///
    /// Entries come out bucket by bucket. That order depends on the hash and
    /// the capacity, and callers should not rely on it.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }
}

impl<V: fmt::Debug> fmt::Debug for FixedHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Builder for creating [`FixedHashTable`] instances with custom settings
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct FixedHashTableBuilder {
    /// Current capacity() setting for this builder
    ///
    /// Zero until set, so an unconfigured builder refuses to build.
    capacity: usize,
}

impl FixedHashTableBuilder {
    /// Create a new [`FixedHashTableBuilder`] with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Select the table capacity, in distinct keys.
    pub fn capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Build an empty [`FixedHashTable`] with the selected options.
    pub fn build<V>(&self) -> Result<FixedHashTable<V>, Error> {
        let capacity = NonZeroUsize::new(self.capacity).ok_or(Error::InvalidCapacity)?;
        Ok(FixedHashTable::with_capacity(capacity))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::{FixedHashTable, FixedHashTableBuilder};
    use crate::Error;

    #[test]
    fn builder_needs_a_capacity() {
        assert_eq!(
            FixedHashTableBuilder::new().build::<u8>().err(),
            Some(Error::InvalidCapacity)
        );
        let table: FixedHashTable<u8> = FixedHashTableBuilder::new().capacity(3).build().unwrap();
        assert_eq!(table.capacity(), 3);
    }

    #[test]
    fn size_tracks_chain_lengths() {
        let mut table = FixedHashTable::new(5).unwrap();
        for (i, key) in ["My", "Socks", "Are", "Really", "Red"].iter().enumerate() {
            assert!(table.set(*key, i));
            assert_eq!(table.bucket_lens().sum::<usize>(), table.len());
        }
        // "Socks" and "Are" share bucket 0
        assert_eq!(table.bucket_lens().collect::<Vec<_>>(), [2, 1, 1, 1, 0]);
        assert_eq!(table.delete("Socks"), Some(1));
        assert_eq!(table.bucket_lens().sum::<usize>(), table.len());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn debug_renders_as_map() {
        let mut table = FixedHashTable::new(1).unwrap();
        table.set("a", 1);
        assert_eq!(format!("{:?}", table), r#"{"a": 1}"#);
    }
}
