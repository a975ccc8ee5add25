//! Implementation of an old-driver tree, also known as a Chtholly tree
//! ([`ChthollyTree`]): a partition of a contiguous integer domain `[min, max]`
//! into adjacent, disjoint closed intervals, each tagged with a value.
//!
//! It supports splitting an interval at a point, assigning a single value to
//! a range (which collapses every interval in that range into one), applying
//! a transform to every interval touching a range, and reading back the
//! intervals intersecting a range, clamped to it.
//!
//! The intervals are kept in a linked chain, so all operations are linear in
//! the number of intervals. This is fast when range assignments dominate the
//! workload, as they keep the number of intervals low; no worst-case bound is
//! provided.
//!
//! Positions can be any primitive integer, or an [`Extended`] integer to work
//! on the unbounded domain `[-∞, +∞]`.

mod discrete;
mod error;
mod node;
/// The old-driver tree itself and its iterators.
pub mod tree;

pub use discrete::{Discrete, Extended};
pub use error::{Error, Result};
pub use node::{Interval, Node, Segment};
pub use tree::{ChthollyTree, Iter, QueryIter};
