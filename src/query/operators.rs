//! Composable sequence operators.
//!
//! Every operator is a free function over any `IntoIterator`, so it works on
//! borrowed dataset slices, on the output of another operator, or on owned
//! vectors alike. Operators that can stream return `impl Iterator`; operators
//! that must see the whole input (ordering, joining, reversing) materialize
//! into a `Vec`. None of them mutate their input.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter::Sum;

use tracing::{debug, trace};

use super::error::{QueryError, QueryResult};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Apply this direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Keep elements satisfying `predicate`, preserving order.
pub fn filter<I, P>(seq: I, predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().filter(predicate)
}

/// Map each element to a new shape, 1:1.
pub fn project<I, B, F>(seq: I, selector: F) -> impl Iterator<Item = B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    seq.into_iter().map(selector)
}

/// Map each element to a sequence and flatten the results.
pub fn project_many<I, U, F>(seq: I, selector: F) -> impl Iterator<Item = U::Item>
where
    I: IntoIterator,
    U: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    seq.into_iter().flat_map(selector)
}

/// Stable sort by `key`.
///
/// Elements with equal keys keep their input order in both directions.
pub fn order_by<I, K, F>(seq: I, key: F, direction: Direction) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    let mut items: Vec<I::Item> = seq.into_iter().collect();
    items.sort_by(|a, b| direction.apply(key(a).cmp(&key(b))));
    items
}

/// Reverse the order of a sequence.
pub fn reverse<I>(seq: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    let mut items: Vec<I::Item> = seq.into_iter().collect();
    items.reverse();
    items
}

/// Inner equi-join.
///
/// Emits `combine(l, r)` for every pair whose keys are equal, in left order
/// and then right order. Rows without a partner on the other side are
/// dropped. Post-join filters are applied by the caller on the output.
pub fn join<L, R, K, O, LK, RK, C>(
    left: L,
    right: R,
    left_key: LK,
    right_key: RK,
    mut combine: C,
) -> Vec<O>
where
    L: IntoIterator,
    R: IntoIterator,
    K: Eq + Hash,
    LK: Fn(&L::Item) -> K,
    RK: Fn(&R::Item) -> K,
    C: FnMut(&L::Item, &R::Item) -> O,
{
    let mut buckets: HashMap<K, Vec<R::Item>> = HashMap::new();
    for r in right {
        buckets.entry(right_key(&r)).or_default().push(r);
    }

    let mut joined = Vec::new();
    let mut probed = 0usize;
    for l in left {
        probed += 1;
        if let Some(matches) = buckets.get(&left_key(&l)) {
            for r in matches {
                joined.push(combine(&l, r));
            }
        }
    }

    trace!(buckets = buckets.len(), probed, joined = joined.len(), "equi-join");
    joined
}

/// True if at least one element satisfies `predicate`. False on empty input.
pub fn any<I, P>(seq: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    seq.into_iter().any(predicate)
}

/// True if every element satisfies `predicate`. Vacuously true on empty input.
pub fn all<I, P>(seq: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    seq.into_iter().all(predicate)
}

/// Equality membership test.
pub fn contains<I, V>(seq: I, value: &V) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    seq.into_iter().any(|item| item.borrow() == value)
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn distinct<I>(seq: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    seq.into_iter().filter(move |item| seen.insert(item.clone()))
}

/// Left-to-right reduction without a seed.
pub fn aggregate<I, F>(seq: I, combine: F) -> QueryResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    seq.into_iter()
        .reduce(combine)
        .ok_or(QueryError::EmptySequence { operator: "aggregate" })
}

/// Left-to-right reduction from `seed`; returns `seed` on empty input.
pub fn fold<I, B, F>(seq: I, seed: B, combine: F) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
{
    seq.into_iter().fold(seed, combine)
}

/// Drop the prefix satisfying `predicate`, then yield the rest untested.
pub fn skip_while<I, P>(seq: I, predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().skip_while(predicate)
}

/// Yield the prefix satisfying `predicate`; stop at the first failure.
pub fn take_while<I, P>(seq: I, predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().take_while(predicate)
}

/// First element satisfying `predicate`, if any.
pub fn first_match<I, P>(seq: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().find(predicate)
}

/// The only element satisfying `predicate`.
///
/// Returns `Ok(None)` when nothing matches and fails with
/// [`QueryError::AmbiguousResult`] when a second match turns up.
pub fn single_match<I, P>(seq: I, predicate: P) -> QueryResult<Option<I::Item>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut matches = seq.into_iter().filter(predicate);
    let Some(found) = matches.next() else {
        return Ok(None);
    };
    if matches.next().is_some() {
        debug!("single_match found a second matching element");
        return Err(QueryError::AmbiguousResult { operator: "single_match" });
    }
    Ok(Some(found))
}

/// Number of elements.
pub fn count<I>(seq: I) -> usize
where
    I: IntoIterator,
{
    seq.into_iter().count()
}

/// Sum of `selector` over the sequence; zero on empty input.
pub fn sum<I, N, F>(seq: I, mut selector: F) -> N
where
    I: IntoIterator,
    N: Sum<N>,
    F: FnMut(&I::Item) -> N,
{
    seq.into_iter().map(|item| selector(&item)).sum()
}

/// Arithmetic mean of `selector` over the sequence.
pub fn average<I, F>(seq: I, mut selector: F) -> QueryResult<f64>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    let (total, n) = seq
        .into_iter()
        .fold((0.0, 0usize), |(total, n), item| (total + selector(&item), n + 1));
    if n == 0 {
        return Err(QueryError::EmptySequence { operator: "average" });
    }
    Ok(total / n as f64)
}

/// Largest value of `selector` over the sequence.
pub fn max<I, K, F>(seq: I, mut selector: F) -> QueryResult<K>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    seq.into_iter()
        .map(|item| selector(&item))
        .max()
        .ok_or(QueryError::EmptySequence { operator: "max" })
}

/// Smallest value of `selector` over the sequence.
pub fn min<I, K, F>(seq: I, mut selector: F) -> QueryResult<K>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    seq.into_iter()
        .map(|item| selector(&item))
        .min()
        .ok_or(QueryError::EmptySequence { operator: "min" })
}
