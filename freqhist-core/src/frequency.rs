//! Frequency counting.
//!
//! [`FrequencyMap`] associates every distinct value of an input sequence with
//! the number of times it occurs. Keys keep the order in which they were
//! first seen, so rendering the map without sorting is deterministic.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use rayon::prelude::*;

use crate::{FloatKey, Result, Value};

/// Inputs shorter than this are counted sequentially by [`FrequencyMap::count_parallel`].
const PARALLEL_THRESHOLD: usize = 16 * 1024;

/// Mapping from distinct value to its occurrence count.
///
/// Invariants: every count is positive, and [`total`](Self::total) equals
/// the number of values added.
#[derive(Debug, Clone)]
pub struct FrequencyMap<K> {
    /// Position of each key in `entries`.
    index: HashMap<K, usize>,
    /// Keys with counts, in first-seen order.
    entries: Vec<(K, u64)>,
    total: u64,
}

impl<K> Default for FrequencyMap<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            total: 0,
        }
    }
}

impl<K: Hash + Eq + Clone> FrequencyMap<K> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every value of the sequence.
    pub fn count<I: IntoIterator<Item = K>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Counts a slice on the rayon thread pool.
    ///
    /// Chunks are merged left to right, so the result, including key order,
    /// is identical to [`count`](Self::count).
    #[must_use]
    pub fn count_parallel(values: &[K]) -> Self
    where
        K: Send + Sync,
    {
        if values.len() < PARALLEL_THRESHOLD {
            return Self::count(values.iter().cloned());
        }
        values
            .par_chunks(PARALLEL_THRESHOLD)
            .map(|chunk| Self::count(chunk.iter().cloned()))
            .reduce(Self::new, |mut left, right| {
                left.merge(right);
                left
            })
    }

    /// Records one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Records `n` occurrences of `key`. Adding zero occurrences is a no-op.
    pub fn add_n(&mut self, key: K, n: u64) {
        if n == 0 {
            return;
        }
        self.total += n;
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1 += n;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, n));
        }
    }

    /// Adds all counts of `other`; keys new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: Self) {
        for (key, n) in other.entries {
            self.add_n(key, n);
        }
    }

    /// Returns the count of `key`, or `None` if it never occurred.
    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    /// Returns true if `key` occurred at least once.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K> FrequencyMap<K> {
    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted input.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Largest count, or 0 for an empty map.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.entries.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// Iterates over `(key, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// Iterates over the distinct keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries sorted by ascending key.
    #[must_use]
    pub fn sorted_by_key(&self) -> Vec<(&K, u64)>
    where
        K: Ord,
    {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Entries sorted by descending count; ties keep first-seen order.
    #[must_use]
    pub fn sorted_by_count(&self) -> Vec<(&K, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The `n` most frequent entries.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&K, u64)> {
        let mut entries = self.sorted_by_count();
        entries.truncate(n);
        entries
    }

    /// Consumes the map, returning entries in first-seen order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(K, u64)> {
        self.entries
    }
}

impl FrequencyMap<Value> {
    /// Counts raw floats, rejecting values that cannot be compared.
    ///
    /// # Errors
    /// Returns [`crate::Error::NonFiniteFloat`] on the first NaN or infinite
    /// value; nothing is counted in that case.
    pub fn count_floats<I: IntoIterator<Item = f64>>(values: I) -> Result<Self> {
        let mut map = Self::new();
        for v in values {
            map.add(Value::Float(FloatKey::new(v)?));
        }
        Ok(map)
    }
}

impl<K: Hash + Eq + Clone> FromIterator<K> for FrequencyMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone> Extend<K> for FrequencyMap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

/// Equality ignores first-seen order.
impl<K: Hash + Eq + Clone> PartialEq for FrequencyMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, n)| other.get(k) == Some(n))
    }
}

impl<K: Hash + Eq + Clone> Eq for FrequencyMap<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_integers() {
        let map = FrequencyMap::count([1, 1, 2, 3, 3, 3]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&1), Some(2));
        assert_eq!(map.get(&2), Some(1));
        assert_eq!(map.get(&3), Some(3));
        assert_eq!(map.get(&4), None);
        assert_eq!(map.total(), 6);
        assert_eq!(map.max_count(), 3);
    }

    #[test]
    fn test_count_strings() {
        let map = FrequencyMap::count(["a", "b", "a"].map(String::from));
        assert_eq!(map.get("a"), Some(2));
        assert_eq!(map.get("b"), Some(1));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_empty() {
        let map: FrequencyMap<i64> = FrequencyMap::count(std::iter::empty());
        assert!(map.is_empty());
        assert_eq!(map.total(), 0);
        assert_eq!(map.max_count(), 0);
        assert!(map.most_common(3).is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let map = FrequencyMap::count([3, 1, 3, 2, 1]);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![3, 1, 2]);

        let by_key: Vec<_> = map.sorted_by_key().into_iter().map(|(k, _)| *k).collect();
        assert_eq!(by_key, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_by_count_ties_keep_first_seen() {
        let map = FrequencyMap::count(["x", "y", "z", "y", "x", "w"]);
        let order: Vec<_> = map.sorted_by_count().into_iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!["x", "y", "z", "w"]);
        assert_eq!(map.most_common(1), vec![(&"x", 2)]);
    }

    #[test]
    fn test_add_n_zero_is_noop() {
        let mut map = FrequencyMap::new();
        map.add_n('a', 0);
        assert!(map.is_empty());
        assert!(!map.contains(&'a'));
    }

    #[test]
    fn test_merge() {
        let mut left = FrequencyMap::count([1, 2]);
        let right = FrequencyMap::count([2, 3, 3]);
        left.merge(right);
        assert_eq!(left, FrequencyMap::count([1, 2, 2, 3, 3]));
        assert_eq!(left.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(FrequencyMap::count([1, 2]), FrequencyMap::count([2, 1]));
        assert_ne!(FrequencyMap::count([1, 2]), FrequencyMap::count([1, 2, 2]));
        assert_ne!(FrequencyMap::count([1]), FrequencyMap::count([1, 2]));
    }

    #[test]
    fn test_count_parallel_matches_sequential() {
        let values: Vec<u32> = (0..100_000u32).map(|i| (i * 7919) % 97).collect();
        let seq = FrequencyMap::count(values.iter().copied());
        let par = FrequencyMap::count_parallel(&values);
        assert_eq!(seq, par);
        assert_eq!(
            seq.keys().collect::<Vec<_>>(),
            par.keys().collect::<Vec<_>>()
        );
        assert_eq!(par.total(), 100_000);
    }

    #[test]
    fn test_count_floats_rejects_nan() {
        let map = FrequencyMap::count_floats([1.5, 1.5, -0.0, 0.0]).unwrap();
        assert_eq!(map.get(&Value::float(1.5).unwrap()), Some(2));
        assert_eq!(map.get(&Value::float(0.0).unwrap()), Some(2));

        assert!(FrequencyMap::count_floats([1.0, f64::NAN]).is_err());
    }
}
