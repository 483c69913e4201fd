//! A single chain of entries
//!
//! Every key that hashes to the same index lands in one [`Bucket`], kept in
//! insertion order. Buckets have no capacity of their own; the table decides
//! whether a new key may be appended.

/// One stored key/value pair
#[derive(Clone, Debug)]
struct Entry<V> {
    /// The key, owned by the table
    key: String,
    /// Caller-supplied value
    value: V,
}

/// Ordered chain of entries sharing a bucket index
#[derive(Clone, Debug)]
pub(crate) struct Bucket<V> {
    /// Entries in insertion order
    entries: Vec<Entry<V>>,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Bucket<V> {
    /// Position of `key` within the chain, if present.
    #[inline(always)]
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Look up the value stored under `key`.
    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Look up the value stored under `key`, mutably.
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Overwrite the value under an existing `key`.
    ///
    /// Hands `value` back if the key is not in this chain, so the caller can
    /// decide whether appending is allowed.
    pub(crate) fn replace(&mut self, key: &str, value: V) -> Result<(), V> {
        match self.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Append a new entry to the end of the chain.
    ///
    /// The caller is responsible for checking that `key` isn't already here.
    pub(crate) fn push(&mut self, key: String, value: V) {
        debug_assert!(self.position(&key).is_none());
        self.entries.push(Entry { key, value });
    }

    /// Remove the entry for `key`, returning its value.
    ///
    /// The remaining entries keep their relative order.
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        self.position(key)
            .map(|item| self.entries.remove(item).value)
    }

    /// Number of entries in this chain
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in chain order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }
}

#[cfg(test)]
mod test {
    use super::Bucket;

    /// Keys of a bucket in chain order
    fn keys<V>(bucket: &Bucket<V>) -> Vec<&str> {
        bucket.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn chain_keeps_insertion_order() {
        let mut bucket = Bucket::default();
        bucket.push("Socks".to_owned(), 1);
        bucket.push("Are".to_owned(), 2);
        bucket.push("Today".to_owned(), 3);
        assert_eq!(keys(&bucket), ["Socks", "Are", "Today"]);

        assert_eq!(bucket.remove("Are"), Some(2));
        assert_eq!(keys(&bucket), ["Socks", "Today"]);
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn replace_only_hits_existing_keys() {
        let mut bucket = Bucket::default();
        bucket.push("a".to_owned(), "Apple");
        assert_eq!(bucket.replace("a", "Avocado"), Ok(()));
        assert_eq!(bucket.get("a"), Some(&"Avocado"));
        assert_eq!(bucket.replace("b", "Banana"), Err("Banana"));
        assert_eq!(bucket.len(), 1);
    }

    #[test]
    fn remove_matches_keys_not_values() {
        let mut bucket = Bucket::default();
        bucket.push("A".to_owned(), "Apple".to_owned());
        assert_eq!(bucket.remove("Apple"), None);
        assert_eq!(bucket.remove("A").as_deref(), Some("Apple"));
        assert_eq!(bucket.remove("A"), None);
        assert_eq!(bucket.len(), 0);
    }
}
