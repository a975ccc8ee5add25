use std::fmt;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

/// Index of a node slot in the tree's arena.
pub(crate) type NodeId = usize;

/// One link of the chain: the closed interval `[left, right]` tagged with `value`.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub(crate) left: K,
    pub(crate) right: K,
    pub(crate) value: V,
    pub(crate) next: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(left: K, right: K, value: V, next: Option<NodeId>) -> Node<K, V> {
        Node {
            left,
            right,
            value,
            next,
        }
    }

    /// Inclusive lower bound.
    pub fn left(&self) -> &K {
        &self.left
    }

    /// Inclusive upper bound.
    pub fn right(&self) -> &K {
        &self.right
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn contains(&self, pos: &K) -> bool
    where
        K: Ord,
    {
        &self.left <= pos && pos <= &self.right
    }

    /// A view of the whole node.
    pub fn segment(&self) -> Segment<'_, K, V>
    where
        K: Clone,
    {
        Segment {
            left: self.left.clone(),
            right: self.right.clone(),
            value: &self.value,
        }
    }
}

impl<K, V> fmt::Display for Node<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}] = {}", self.left, self.right, self.value)
    }
}

/// A read view of a sub-interval of the chain.
///
/// Handed to the `transform` and `query` callbacks. For `query`, the bounds
/// are clamped to the queried range, so they need not match a real node.
#[cfg_attr(feature="serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment<'a, K, V> {
    pub left: K,
    pub right: K,
    pub value: &'a V,
}

impl<K, V: Clone> Segment<'_, K, V> {
    pub fn to_interval(&self) -> Interval<K, V>
    where
        K: Clone,
    {
        Interval {
            left: self.left.clone(),
            right: self.right.clone(),
            value: self.value.clone(),
        }
    }
}

impl<K, V> fmt::Display for Segment<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}] = {}", self.left, self.right, self.value)
    }
}

/// An owned `(left, right, value)` triple, used to seed a tree from a
/// pre-built chain and to take one apart again.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<K, V> {
    pub left: K,
    pub right: K,
    pub value: V,
}

impl<K, V> Interval<K, V> {
    pub fn new(left: K, right: K, value: V) -> Interval<K, V> {
        Interval { left, right, value }
    }
}

impl<K, V> From<(K, K, V)> for Interval<K, V> {
    fn from((left, right, value): (K, K, V)) -> Self {
        Interval { left, right, value }
    }
}
