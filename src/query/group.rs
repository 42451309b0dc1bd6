//! Grouping and per-group aggregation.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use super::operators::{order_by, Direction};

/// An explicit mapping from group key to value.
///
/// Entries are kept in the order their key was first seen in the input. Use
/// [`Groups::into_sorted_by_key`] when a computed order is needed instead.
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    /// Slot for `key`, created with `V::default()` if missing.
    fn slot(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let position = match self.index.get(&key).copied() {
            Some(position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, V::default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Get the value for a group.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// Check if a group exists.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate over keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Transform every value, keeping keys and order.
    pub fn map_values<W, F>(self, mut f: F) -> Groups<K, W>
    where
        F: FnMut(V) -> W,
    {
        Groups {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
            index: self.index,
        }
    }

    /// Transform every value, stopping at the first error.
    pub fn try_map_values<W, E, F>(self, mut f: F) -> Result<Groups<K, W>, E>
    where
        F: FnMut(V) -> Result<W, E>,
    {
        let entries = self
            .entries
            .into_iter()
            .map(|(k, v)| f(v).map(|w| (k, w)))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Groups { entries, index: self.index })
    }

    /// Consume into `(key, value)` pairs ordered by key.
    pub fn into_sorted_by_key(self, direction: Direction) -> Vec<(K, V)>
    where
        K: Ord,
    {
        order_by(self.entries, |(k, _)| k.clone(), direction)
    }
}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Partition a sequence by `key`. Each group keeps input order.
pub fn group_by<I, K, F>(seq: I, mut key: F) -> Groups<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: Groups<K, Vec<I::Item>> = Groups::new();
    let mut rows = 0usize;
    for item in seq {
        rows += 1;
        let k = key(&item);
        groups.slot(k).push(item);
    }
    trace!(rows, groups = groups.len(), "group_by");
    groups
}

/// Partition by `key` and reduce each partition with `aggregate`.
///
/// Partitions are never empty, so aggregates such as max or count are always
/// defined here.
pub fn group_by_aggregate<I, K, A, KF, AF>(seq: I, key: KF, mut aggregate: AF) -> Groups<K, A>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    KF: FnMut(&I::Item) -> K,
    AF: FnMut(&[I::Item]) -> A,
{
    group_by(seq, key).map_values(|items| aggregate(&items))
}

/// Like [`group_by_aggregate`], for aggregates that can fail.
pub fn try_group_by_aggregate<I, K, A, E, KF, AF>(
    seq: I,
    key: KF,
    mut aggregate: AF,
) -> Result<Groups<K, A>, E>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    KF: FnMut(&I::Item) -> K,
    AF: FnMut(&[I::Item]) -> Result<A, E>,
{
    group_by(seq, key).try_map_values(|items| aggregate(&items))
}
