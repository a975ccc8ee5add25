use crate::discrete::{Discrete, Extended};
use crate::error::{Error, Result};
use crate::node::{Interval, Node, NodeId, Segment};
use std::cmp;
use std::fmt;
#[cfg(feature="serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An old-driver tree: the domain `[min, max]` partitioned into adjacent,
/// disjoint closed intervals, each tagged with a value.
///
/// Despite the name, the intervals form a singly-linked chain ordered by
/// their left bound. Every operation scans the chain linearly, which stays
/// cheap as long as the workload is dominated by [`ChthollyTree::assign`],
/// since each assignment collapses the whole assigned range into one node.
///
/// The chain lives in an arena; links are slot indices and slots freed by
/// `assign` are recycled.
///
/// ```
/// use chtholly_tree::ChthollyTree;
///
/// let mut tree = ChthollyTree::new(0, 10, 1).unwrap();
/// tree.assign(3, 5, 2).unwrap();
/// tree.assign(6, 10, 3).unwrap();
///
/// let mut sum = 0;
/// tree.query(1, 7, |s| sum += s.value * (s.right - s.left + 1)).unwrap();
/// assert_eq!(sum, 14);
/// ```
#[derive(Clone, Debug)]
pub struct ChthollyTree<K, V> {
    min: K,
    max: K,
    head: NodeId,
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
    len: usize,
}

impl<K, V> ChthollyTree<K, V>
where
    K: Discrete,
{
    /// Creates a tree over `[left, right]` holding `value` everywhere.
    pub fn new(left: K, right: K, value: V) -> Result<ChthollyTree<K, V>> {
        if left > right {
            return Err(Error::InvalidRange);
        }

        Ok(Self::seed(left, right, value))
    }

    fn seed(left: K, right: K, value: V) -> ChthollyTree<K, V> {
        ChthollyTree {
            min: left.clone(),
            max: right.clone(),
            head: 0,
            slots: vec![Some(Node::new(left, right, value, None))],
            free: Vec::new(),
            len: 1,
        }
    }

    /// Creates a tree from an already partitioned chain.
    ///
    /// The intervals must be given in order, each one starting right after
    /// the previous one ends. The domain is `[first.left, last.right]`.
    pub fn from_intervals<I>(intervals: I) -> Result<ChthollyTree<K, V>>
    where
        I: IntoIterator,
        I::Item: Into<Interval<K, V>>,
    {
        let mut slots: Vec<Option<Node<K, V>>> = Vec::new();

        for interval in intervals {
            let Interval { left, right, value } = interval.into();
            if left > right {
                return Err(Error::InvalidRange);
            }
            let id = slots.len();
            if let Some(Some(prev)) = slots.last_mut() {
                if prev.right.successor().as_ref() != Some(&left) {
                    return Err(Error::Discontiguous);
                }
                prev.next = Some(id);
            }
            slots.push(Some(Node::new(left, right, value, None)));
        }

        let (min, max) = match (slots.first(), slots.last()) {
            (Some(Some(first)), Some(Some(last))) => (first.left.clone(), last.right.clone()),
            _ => return Err(Error::Empty),
        };

        Ok(ChthollyTree {
            min,
            max,
            head: 0,
            len: slots.len(),
            slots,
            free: Vec::new(),
        })
    }

    /// Lower bound of the domain.
    pub fn min(&self) -> &K {
        &self.min
    }

    /// Upper bound of the domain.
    pub fn max(&self) -> &K {
        &self.max
    }

    /// Number of nodes currently in the chain. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates over every node of the chain, in order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: self,
            cursor: Some(self.head),
        }
    }

    /// Returns the value at `pos`.
    pub fn get(&self, pos: &K) -> Result<&V> {
        if pos < &self.min || pos > &self.max {
            return Err(Error::PositionOutOfRange);
        }

        match self.iter().find(|node| node.contains(pos)) {
            Some(node) => Ok(&node.value),
            None => unreachable!("no node covers {:?}", pos),
        }
    }

    /// Calls `read` once for every part of the chain that intersects
    /// `[left, right]`, in order. The segments are clamped to the queried
    /// range, so together they cover exactly `[left, right]`.
    ///
    /// The tree is left untouched: no node is split.
    pub fn query<F>(&self, left: K, right: K, mut read: F) -> Result<()>
    where
        F: FnMut(Segment<'_, K, V>),
    {
        for segment in self.query_iter(left, right)? {
            read(segment);
        }

        Ok(())
    }

    /// Iterator flavour of [`ChthollyTree::query`].
    pub fn query_iter(&self, left: K, right: K) -> Result<QueryIter<'_, K, V>> {
        self.check_range(&left, &right)?;

        Ok(QueryIter {
            nodes: self.iter(),
            left,
            right,
        })
    }

    /// Takes the chain apart into its intervals, in order.
    pub fn into_intervals(self) -> Vec<Interval<K, V>> {
        let mut slots = self.slots;
        let mut intervals = Vec::with_capacity(self.len);
        let mut cursor = Some(self.head);

        while let Some(id) = cursor {
            let Some(node) = slots[id].take() else {
                unreachable!("dangling link to slot {}", id);
            };
            cursor = node.next;
            intervals.push(Interval::new(node.left, node.right, node.value));
        }

        intervals
    }

    fn check_range(&self, left: &K, right: &K) -> Result<()> {
        if left > right {
            return Err(Error::InvalidRange);
        }
        if left < &self.min || right > &self.max {
            return Err(Error::RangeOutOfBounds);
        }

        Ok(())
    }

    fn node(&self, id: NodeId) -> &Node<K, V> {
        match &self.slots[id] {
            Some(node) => node,
            None => unreachable!("dangling link to slot {}", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match &mut self.slots[id] {
            Some(node) => node,
            None => unreachable!("dangling link to slot {}", id),
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let Some(node) = self.slots[id].take() else {
            unreachable!("slot {} released twice", id);
        };
        self.free.push(id);
        self.len -= 1;
        node
    }
}

impl<K, V> ChthollyTree<K, V>
where
    K: Discrete,
    V: Clone,
{
    /// Makes sure a node starts exactly at `pos`, splitting the node that
    /// contains it if needed, and returns that node.
    ///
    /// Splitting where a node already starts changes nothing.
    pub fn split(&mut self, pos: K) -> Result<&Node<K, V>> {
        let (_, id) = self.split_at(pos)?;
        Ok(self.node(id))
    }

    /// Overwrites `[left, right]` with a single node holding `value`,
    /// dropping every node that used to cover that range, and returns the
    /// new node.
    pub fn assign(&mut self, left: K, right: K, value: V) -> Result<&Node<K, V>> {
        let (prev, first, end) = self.split_range(&left, &right)?;

        let mut dropped = 0;
        let mut cursor = Some(first);
        while cursor != end {
            let Some(id) = cursor else {
                unreachable!("chain ended before the end of [{:?}, {:?}]", left, right);
            };
            cursor = self.release(id).next;
            dropped += 1;
        }
        log::debug!("assign [{:?}, {:?}] coalesced {} node(s)", left, right, dropped);

        let id = self.alloc(Node::new(left, right, value, end));
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(id),
            None => self.head = id,
        }

        Ok(self.node(id))
    }

    /// Replaces the value of every node covering `[left, right]` with
    /// `action(node)`. The range is split at its ends first, but nodes are
    /// never merged: neighbours may end up holding equal values.
    ///
    /// `action` is called once per node, not once per position.
    pub fn transform<F>(&mut self, left: K, right: K, mut action: F) -> Result<()>
    where
        F: FnMut(Segment<'_, K, V>) -> V,
    {
        let (_, first, end) = self.split_range(&left, &right)?;

        let mut cursor = Some(first);
        while cursor != end {
            let Some(id) = cursor else {
                unreachable!("chain ended before the end of [{:?}, {:?}]", left, right);
            };
            let value = action(self.node(id).segment());
            let node = self.node_mut(id);
            node.value = value;
            cursor = node.next;
        }

        Ok(())
    }

    /// Splits at `left` and right after `right`. Returns the node before
    /// `left` (if any), the node starting at `left`, and the node starting
    /// right after `right` (`None` when `right` is the end of the domain).
    fn split_range(&mut self, left: &K, right: &K) -> Result<(Option<NodeId>, NodeId, Option<NodeId>)> {
        self.check_range(left, right)?;

        let (prev, first) = self.split_at(left.clone())?;
        let end = if right < &self.max {
            let Some(after) = right.successor() else {
                unreachable!("{:?} is below the domain end but has no successor", right);
            };
            Some(self.split_at(after)?.1)
        } else {
            None
        };

        Ok((prev, first, end))
    }

    /// Returns the predecessor of the node starting at `pos`, and that node.
    fn split_at(&mut self, pos: K) -> Result<(Option<NodeId>, NodeId)> {
        if pos < self.min || pos > self.max {
            return Err(Error::PositionOutOfRange);
        }

        let mut prev = None;
        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            let node = self.node(id);
            if node.left == pos {
                return Ok((prev, id));
            }

            if node.contains(&pos) {
                let Some(right) = pos.predecessor() else {
                    unreachable!("{:?} lies past a node start but has no predecessor", pos);
                };
                log::trace!("split [{:?}, {:?}] at {:?}", node.left, node.right, pos);

                let tail = Node::new(pos, node.right.clone(), node.value.clone(), node.next);
                let tail = self.alloc(tail);
                let node = self.node_mut(id);
                node.right = right;
                node.next = Some(tail);
                return Ok((Some(id), tail));
            }

            prev = Some(id);
            cursor = node.next;
        }

        unreachable!("no node covers {:?}", pos);
    }
}

impl<T, V> ChthollyTree<Extended<T>, V>
where
    T: Discrete,
{
    /// Creates a tree over `[-∞, +∞]` holding `value` everywhere.
    pub fn unbounded(value: V) -> ChthollyTree<Extended<T>, V> {
        Self::seed(Extended::NegInfinity, Extended::PosInfinity, value)
    }
}

impl<T, V> Default for ChthollyTree<Extended<T>, V>
where
    T: Discrete,
    V: Default,
{
    fn default() -> Self {
        Self::unbounded(V::default())
    }
}

impl<K, V> PartialEq for ChthollyTree<K, V>
where
    K: Discrete,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().map(Node::segment).eq(other.iter().map(Node::segment))
    }
}

impl<K, V> fmt::Display for ChthollyTree<K, V>
where
    K: Discrete + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

impl<'a, K, V> IntoIterator for &'a ChthollyTree<K, V>
where
    K: Discrete,
{
    type Item = &'a Node<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the nodes of a [`ChthollyTree`], in order.
pub struct Iter<'a, K, V> {
    tree: &'a ChthollyTree<K, V>,
    cursor: Option<NodeId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Discrete,
{
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.cursor?);
        self.cursor = node.next;
        Some(node)
    }
}

/// How a node sits relative to a queried range. Exactly one case holds for
/// any node, so a node yields at most one segment.
enum Overlap {
    Before,
    After,
    LeftEdge,
    Inside,
    RightEdge,
}

impl Overlap {
    fn classify<K: Ord, V>(node: &Node<K, V>, left: &K, right: &K) -> Overlap {
        if &node.right < left {
            Overlap::Before
        } else if &node.left > right {
            Overlap::After
        } else if &node.left <= left {
            Overlap::LeftEdge
        } else if &node.right <= right {
            Overlap::Inside
        } else {
            Overlap::RightEdge
        }
    }
}

/// Iterator over the clamped segments intersecting a range. See
/// [`ChthollyTree::query_iter`].
pub struct QueryIter<'a, K, V> {
    nodes: Iter<'a, K, V>,
    left: K,
    right: K,
}

impl<'a, K, V> Iterator for QueryIter<'a, K, V>
where
    K: Discrete,
{
    type Item = Segment<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.nodes.next()?;
            let (left, right) = match Overlap::classify(node, &self.left, &self.right) {
                Overlap::Before => continue,
                Overlap::After => {
                    // Ordered chain: nothing further can intersect.
                    self.nodes.cursor = None;
                    return None;
                }
                Overlap::LeftEdge => (self.left.clone(), cmp::min(&self.right, &node.right).clone()),
                Overlap::Inside => (node.left.clone(), node.right.clone()),
                Overlap::RightEdge => (cmp::max(&self.left, &node.left).clone(), self.right.clone()),
            };

            return Some(Segment {
                left,
                right,
                value: &node.value,
            });
        }
    }
}

#[cfg(feature="serde")]
impl<K, V> Serialize for ChthollyTree<K, V>
where
    K: Discrete + Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(Node::segment))
    }
}

#[cfg(feature="serde")]
impl<'de, K, V> Deserialize<'de> for ChthollyTree<K, V>
where
    K: Discrete + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let intervals = Vec::<Interval<K, V>>::deserialize(deserializer)?;
        ChthollyTree::from_intervals(intervals).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discrete::Extended::*;

    fn chain<K: Discrete, V: Clone>(tree: &ChthollyTree<K, V>) -> Vec<(K, K, V)> {
        tree.iter()
            .map(|node| (node.left.clone(), node.right.clone(), node.value.clone()))
            .collect()
    }

    fn seed() -> ChthollyTree<i32, i32> {
        ChthollyTree::new(0, 10, 1).unwrap()
    }

    #[test]
    fn new_rejects_reversed_bounds() {
        assert_eq!(ChthollyTree::new(5, 2, ()).unwrap_err(), Error::InvalidRange);

        let tree = ChthollyTree::new(3, 3, 'a').unwrap();
        assert_eq!(chain(&tree), vec![(3, 3, 'a')]);
        assert_eq!((tree.min(), tree.max()), (&3, &3));
    }

    #[test]
    fn split_inside_a_node() {
        let mut tree = seed();

        let node = tree.split(5).unwrap();
        assert_eq!((node.left(), node.right(), node.value()), (&5, &10, &1));
        assert_eq!(chain(&tree), vec![(0, 4, 1), (5, 10, 1)]);

        let node = tree.split(6).unwrap();
        assert_eq!(node.left(), &6);
        assert_eq!(chain(&tree), vec![(0, 4, 1), (5, 5, 1), (6, 10, 1)]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn split_at_domain_start_returns_head() {
        let mut tree = seed();
        let head: *const Node<i32, i32> = tree.iter().next().unwrap();

        let split: *const Node<i32, i32> = tree.split(0).unwrap();

        assert!(std::ptr::eq(head, split));
        assert_eq!(chain(&tree), vec![(0, 10, 1)]);
    }

    #[test]
    fn split_is_idempotent() {
        let mut tree = seed();

        let first = tree.split(7).unwrap().segment().to_interval();
        let snapshot = chain(&tree);
        let second = tree.split(7).unwrap().segment().to_interval();

        assert_eq!(first, second);
        assert_eq!(chain(&tree), snapshot);
    }

    #[test]
    fn split_at_domain_end() {
        let mut tree = seed();

        tree.split(10).unwrap();

        assert_eq!(chain(&tree), vec![(0, 9, 1), (10, 10, 1)]);
    }

    #[test]
    fn split_out_of_range() {
        let mut tree = seed();

        assert_eq!(tree.split(11).unwrap_err(), Error::PositionOutOfRange);
        assert_eq!(tree.split(-1).unwrap_err(), Error::PositionOutOfRange);
        assert_eq!(chain(&tree), vec![(0, 10, 1)]);
    }

    #[test]
    fn assign_coalesces_and_trims() {
        let mut tree = seed();

        let node = tree.assign(2, 5, 3).unwrap();
        assert_eq!((node.left(), node.right(), node.value()), (&2, &5, &3));
        assert_eq!(chain(&tree), vec![(0, 1, 1), (2, 5, 3), (6, 10, 1)]);

        let node = tree.assign(3, 7, 4).unwrap();
        assert_eq!((node.left(), node.right(), node.value()), (&3, &7, &4));
        assert_eq!(chain(&tree), vec![(0, 1, 1), (2, 2, 3), (3, 7, 4), (8, 10, 1)]);
    }

    #[test]
    fn assign_single_point() {
        let mut tree = seed();

        tree.assign(5, 5, 2).unwrap();

        assert_eq!(chain(&tree), vec![(0, 4, 1), (5, 5, 2), (6, 10, 1)]);
    }

    #[test]
    fn assign_right_boundary() {
        let mut tree = seed();

        tree.assign(10, 10, 2).unwrap();

        assert_eq!(chain(&tree), vec![(0, 9, 1), (10, 10, 2)]);
    }

    #[test]
    fn assign_whole_range() {
        let mut tree = seed();
        tree.assign(1, 2, 7).unwrap();
        tree.assign(4, 8, 9).unwrap();

        let node = tree.assign(0, 10, 2).unwrap();
        assert_eq!((node.left(), node.right()), (&0, &10));

        assert_eq!(chain(&tree), vec![(0, 10, 2)]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn assign_recycles_slots() {
        let mut tree = seed();

        for i in 0..100 {
            tree.assign(i % 9, i % 9 + 1, i).unwrap();
            tree.assign(0, 10, 0).unwrap();
        }

        assert_eq!(tree.len(), 1);
        assert!(tree.slots.len() <= 4);
    }

    #[test]
    fn assign_errors() {
        let mut tree = seed();

        assert_eq!(tree.assign(5, 2, 0).unwrap_err(), Error::InvalidRange);
        assert_eq!(tree.assign(-1, 5, 0).unwrap_err(), Error::RangeOutOfBounds);
        assert_eq!(tree.assign(2, 11, 0).unwrap_err(), Error::RangeOutOfBounds);
        assert_eq!(chain(&tree), vec![(0, 10, 1)]);
    }

    #[test]
    fn transform_updates_without_merging() {
        let mut tree = seed();

        tree.transform(2, 5, |s| s.value + 1).unwrap();
        assert_eq!(chain(&tree), vec![(0, 1, 1), (2, 5, 2), (6, 10, 1)]);

        // Brings [2, 5] back to 1, but the three nodes stay apart.
        tree.transform(0, 10, |s| if s.left == 2 { s.value - 1 } else { *s.value }).unwrap();
        assert_eq!(chain(&tree), vec![(0, 1, 1), (2, 5, 1), (6, 10, 1)]);
    }

    #[test]
    fn transform_calls_action_once_per_node() {
        let mut tree = seed();
        tree.assign(3, 5, 2).unwrap();

        let mut seen = Vec::new();
        tree.transform(1, 7, |s| {
            seen.push((s.left, s.right));
            s.value * 10
        })
        .unwrap();

        assert_eq!(seen, vec![(1, 2), (3, 5), (6, 7)]);
        assert_eq!(
            chain(&tree),
            vec![(0, 0, 1), (1, 2, 10), (3, 5, 20), (6, 7, 10), (8, 10, 1)]
        );
    }

    #[test]
    fn transform_errors() {
        let mut tree = seed();

        assert_eq!(tree.transform(5, 2, |s| *s.value).unwrap_err(), Error::InvalidRange);
        assert_eq!(tree.transform(-1, 5, |s| *s.value).unwrap_err(), Error::RangeOutOfBounds);
        assert_eq!(tree.transform(2, 11, |s| *s.value).unwrap_err(), Error::RangeOutOfBounds);
    }

    #[test]
    fn query_inside_one_node() {
        let tree = seed();

        let mut seen = Vec::new();
        tree.query(2, 5, |s| seen.push((s.left, s.right, *s.value))).unwrap();

        assert_eq!(seen, vec![(2, 5, 1)]);
    }

    #[test]
    fn query_decomposes_and_clamps() {
        let mut tree = seed();
        tree.assign(3, 5, 2).unwrap();
        tree.assign(6, 10, 3).unwrap();

        let mut seen = Vec::new();
        let mut sum = 0;
        tree.query(1, 7, |s| {
            sum += s.value * (s.right - s.left + 1);
            seen.push((s.left, s.right, *s.value));
        })
        .unwrap();

        assert_eq!(seen, vec![(1, 2, 1), (3, 5, 2), (6, 7, 3)]);
        assert_eq!(sum, 14);
        // Nothing was split.
        assert_eq!(chain(&tree), vec![(0, 2, 1), (3, 5, 2), (6, 10, 3)]);
    }

    #[test]
    fn query_on_node_boundaries() {
        let mut tree = seed();
        tree.assign(3, 5, 2).unwrap();

        let segments: Vec<_> = tree
            .query_iter(3, 5)
            .unwrap()
            .map(|s| s.to_interval())
            .collect();
        assert_eq!(segments, vec![Interval::new(3, 5, 2)]);

        let segments: Vec<_> = tree
            .query_iter(5, 6)
            .unwrap()
            .map(|s| s.to_interval())
            .collect();
        assert_eq!(segments, vec![Interval::new(5, 5, 2), Interval::new(6, 6, 1)]);
    }

    #[test]
    fn query_errors() {
        let tree = seed();

        assert_eq!(tree.query(5, 2, |_| ()).unwrap_err(), Error::InvalidRange);
        assert_eq!(tree.query(-1, 5, |_| ()).unwrap_err(), Error::RangeOutOfBounds);
        assert_eq!(tree.query(2, 11, |_| ()).unwrap_err(), Error::RangeOutOfBounds);
    }

    #[test]
    fn get_point() {
        let mut tree = seed();
        tree.assign(3, 5, 2).unwrap();

        assert_eq!(tree.get(&2), Ok(&1));
        assert_eq!(tree.get(&3), Ok(&2));
        assert_eq!(tree.get(&6), Ok(&1));
        assert_eq!(tree.get(&11), Err(Error::PositionOutOfRange));
    }

    #[test]
    fn from_intervals() {
        let tree: ChthollyTree<i32, char> =
            ChthollyTree::from_intervals(vec![(0, 2, 'a'), (3, 3, 'b'), (4, 9, 'c')]).unwrap();
        assert_eq!((tree.min(), tree.max()), (&0, &9));
        assert_eq!(tree.len(), 3);
        assert_eq!(chain(&tree), vec![(0, 2, 'a'), (3, 3, 'b'), (4, 9, 'c')]);

        let gap = ChthollyTree::<i32, char>::from_intervals(vec![(0, 2, 'a'), (4, 9, 'c')]);
        assert_eq!(gap.unwrap_err(), Error::Discontiguous);

        let overlap = ChthollyTree::<i32, char>::from_intervals(vec![(0, 2, 'a'), (2, 9, 'c')]);
        assert_eq!(overlap.unwrap_err(), Error::Discontiguous);

        let reversed = ChthollyTree::<i32, char>::from_intervals(vec![(0, 2, 'a'), (3, 1, 'c')]);
        assert_eq!(reversed.unwrap_err(), Error::InvalidRange);

        let empty = ChthollyTree::<i32, char>::from_intervals(Vec::<(i32, i32, char)>::new());
        assert_eq!(empty.unwrap_err(), Error::Empty);
    }

    #[test]
    fn into_intervals_follows_the_chain() {
        let mut tree = seed();
        tree.assign(6, 10, 3).unwrap();
        tree.assign(0, 2, 5).unwrap();

        let intervals = tree.clone().into_intervals();
        assert_eq!(
            intervals,
            vec![Interval::new(0, 2, 5), Interval::new(3, 5, 1), Interval::new(6, 10, 3)]
        );
        assert_eq!(ChthollyTree::from_intervals(intervals).unwrap(), tree);
    }

    #[test]
    fn unbounded_domain() {
        let mut tree: ChthollyTree<Extended<i64>, bool> = ChthollyTree::default();
        assert_eq!((tree.min(), tree.max()), (&NegInfinity, &PosInfinity));

        tree.assign(Finite(10), Finite(19), true).unwrap();
        assert_eq!(
            chain(&tree),
            vec![
                (NegInfinity, Finite(9), false),
                (Finite(10), Finite(19), true),
                (Finite(20), PosInfinity, false),
            ]
        );

        // Assigning up to the domain end skips the right split.
        tree.assign(Finite(15), PosInfinity, true).unwrap();
        assert_eq!(
            chain(&tree),
            vec![
                (NegInfinity, Finite(9), false),
                (Finite(10), Finite(14), true),
                (Finite(15), PosInfinity, true),
            ]
        );

        tree.split(PosInfinity).unwrap();
        assert_eq!(chain(&tree)[2], (Finite(15), Finite(i64::MAX), true));
        assert_eq!(chain(&tree)[3], (PosInfinity, PosInfinity, true));
    }

    #[test]
    fn bounded_integer_edges() {
        let mut tree = ChthollyTree::new(u8::MIN, u8::MAX, 0u32).unwrap();

        tree.assign(250, 255, 1).unwrap();
        tree.transform(0, 255, |s| s.value + 1).unwrap();

        assert_eq!(chain(&tree), vec![(0, 249, 1), (250, 255, 2)]);
    }

    #[test]
    fn display() {
        let mut tree = ChthollyTree::unbounded(0);
        tree.assign(Finite(-3), Finite(4), 7).unwrap();

        assert_eq!(tree.to_string(), "[-∞, -4] = 0 [-3, 4] = 7 [5, +∞] = 0");
    }
}
