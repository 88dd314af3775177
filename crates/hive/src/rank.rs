//! Pluggable node ordering.
//!
//! The layout engine only consumes rank order; it never computes a ranking
//! metric. Callers express "how to order a group" as a [`Ranking`]: any
//! comparison closure qualifies, [`ByKey`] adapts a key function (such as a
//! pre-computed centrality score) and [`Descending`] reverses another ranking.

use std::cmp::Ordering;

/// A total order over nodes used to assign ranks within a group.
pub trait Ranking<N: ?Sized> {
    /// Compares two nodes; `Less` means `a` is placed closer to the origin.
    fn compare(&self, a: &N, b: &N) -> Ordering;
}

impl<N: ?Sized, F> Ranking<N> for F
where
    F: Fn(&N, &N) -> Ordering,
{
    fn compare(&self, a: &N, b: &N) -> Ordering {
        self(a, b)
    }
}

/// Orders nodes by ascending key.
///
/// Keys only need `PartialOrd`, so floating point scores work directly. A key
/// that is not comparable with itself (NaN) sorts after every comparable key;
/// such keys keep their input order among themselves.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<N: ?Sized, K, F> Ranking<N> for ByKey<F>
where
    F: Fn(&N) -> K,
    K: PartialOrd,
{
    fn compare(&self, a: &N, b: &N) -> Ordering {
        let (ka, kb) = ((self.0)(a), (self.0)(b));
        match (is_comparable(&ka), is_comparable(&kb)) {
            (true, true) => ka.partial_cmp(&kb).unwrap_or(Ordering::Equal),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        }
    }
}

fn is_comparable<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_some()
}

/// Reverses another ranking, e.g. to put the highest score nearest the origin.
#[derive(Debug, Clone, Copy)]
pub struct Descending<R>(pub R);

impl<N: ?Sized, R> Ranking<N> for Descending<R>
where
    R: Ranking<N>,
{
    fn compare(&self, a: &N, b: &N) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Sorts `nodes` in place by `ranking`. The sort is stable.
pub fn rank_nodes<N, R>(nodes: &mut [N], ranking: &R)
where
    R: Ranking<N> + ?Sized,
{
    nodes.sort_by(|a, b| ranking.compare(a, b));
}
