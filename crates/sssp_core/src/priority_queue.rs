use std::{fmt::Debug, hash::Hash};

use log::trace;
use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::error::{Error, Result};

/// Entry stored in the backing array of an [`IndexedMinHeap`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeapItem<P, K> {
    pub priority: P,
    pub key: K,
}

impl<P, K> HeapItem<P, K> {
    pub fn new(priority: P, key: K) -> Self {
        HeapItem { priority, key }
    }
}

/// Read-only view of one heap slot, used to lay out the heap as a tree.
#[derive(Clone, Debug, PartialEq)]
pub struct HeapNode<P, K> {
    pub priority: P,
    pub key: K,
    /// Array positions of the children of this slot (zero, one or two).
    pub children: Vec<usize>,
}

/// Priority queue implementation using an indexed binary heap.
/// The heap is a min heap, so the entry with the lowest priority is always at
/// the top. Every key may appear at most once and its priority can be changed
/// in O(log n) with [`IndexedMinHeap::update_priority`].
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<K, P = Weight> {
    items: Vec<HeapItem<P, K>>,
    /// Key -> position of its entry in `items`
    positions: FxHashMap<K, usize>,
}

impl<K, P> IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy,
{
    pub fn new() -> Self {
        IndexedMinHeap {
            items: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            items: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current priority of `key`.
    pub fn priority_of(&self, key: &K) -> Result<P> {
        self.positions
            .get(key)
            .map(|&idx| self.items[idx].priority)
            .ok_or_else(|| Error::not_found("heap identity", key))
    }

    pub fn peek_min(&self) -> Option<(&P, &K)> {
        self.items.first().map(|item| (&item.priority, &item.key))
    }

    /// Inserts `key` with `priority`.
    ///
    /// Fails with [`Error::DuplicateIdentity`] if `key` is already queued.
    pub fn push(&mut self, priority: P, key: K) -> Result<()> {
        if self.positions.contains_key(&key) {
            return Err(Error::duplicate(&key));
        }

        let idx = self.items.len();
        self.positions.insert(key.clone(), idx);
        self.items.push(HeapItem::new(priority, key));
        self.sift_up(idx);

        Ok(())
    }

    /// Removes and returns the entry with the lowest priority.
    ///
    /// Fails with [`Error::EmptyCollection`] if the heap is empty.
    pub fn pop_min(&mut self) -> Result<(P, K)> {
        let last = self.items.pop().ok_or(Error::EmptyCollection)?;

        let min = if self.items.is_empty() {
            last
        } else {
            // Move the last entry to the root
            let min = std::mem::replace(&mut self.items[0], last);
            self.positions.insert(self.items[0].key.clone(), 0);
            min
        };
        self.positions.remove(&min.key);

        self.sift_down(0);

        trace!("Popped {:?}", min.key);
        Ok((min.priority, min.key))
    }

    /// Replaces the priority of `key` and restores the heap property.
    /// A lower priority moves the entry towards the root, a higher one
    /// towards the leaves.
    ///
    /// Fails with [`Error::NotFound`] if `key` is not queued.
    pub fn update_priority(&mut self, key: &K, priority: P) -> Result<()> {
        let idx = *self
            .positions
            .get(key)
            .ok_or_else(|| Error::not_found("heap identity", key))?;

        let old_priority = self.items[idx].priority;
        self.items[idx].priority = priority;

        if priority < old_priority {
            self.sift_up(idx);
        } else if priority > old_priority {
            self.sift_down(idx);
        }

        Ok(())
    }

    /// Array-ordered view of the heap, root first.
    pub fn snapshot(&self) -> Vec<HeapNode<P, K>> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| HeapNode {
                priority: item.priority,
                key: item.key.clone(),
                children: self.children(idx).collect(),
            })
            .collect()
    }

    fn children(&self, idx: usize) -> impl Iterator<Item = usize> {
        let len = self.items.len();
        [2 * idx + 1, 2 * idx + 2]
            .into_iter()
            .filter(move |&child| child < len)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.positions.insert(self.items[a].key.clone(), a);
        self.positions.insert(self.items[b].key.clone(), b);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[idx].priority < self.items[parent].priority {
                self.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // Prefer the left child on ties
            let child = if right < len && self.items[right].priority < self.items[left].priority
            {
                right
            } else {
                left
            };

            if self.items[child].priority < self.items[idx].priority {
                self.swap(idx, child);
                idx = child;
            } else {
                break;
            }
        }
    }
}

impl<K, P> Default for IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    /// Checks the heap property and that every position points at its key.
    fn assert_consistent<K, P>(heap: &IndexedMinHeap<K, P>)
    where
        K: Eq + Hash + Clone + Debug,
        P: PartialOrd + Copy + Debug,
    {
        assert_eq!(heap.items.len(), heap.positions.len());

        for (idx, item) in heap.items.iter().enumerate().skip(1) {
            let parent = &heap.items[(idx - 1) / 2];
            assert!(
                parent.priority <= item.priority,
                "heap property violated at {}: parent {:?} > child {:?}",
                idx,
                parent.priority,
                item.priority
            );
        }

        for (key, &idx) in heap.positions.iter() {
            assert_eq!(&heap.items[idx].key, key);
        }
    }

    fn drain<K, P>(heap: &mut IndexedMinHeap<K, P>) -> Vec<(P, K)>
    where
        K: Eq + Hash + Clone + Debug,
        P: PartialOrd + Copy + Debug,
    {
        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.pop_min().unwrap());
            assert_consistent(heap);
        }
        out
    }

    #[test]
    fn push_and_pop_in_order() {
        let mut heap = IndexedMinHeap::new();
        heap.push(3.0, "a").unwrap();
        heap.push(1.0, "b").unwrap();
        heap.push(2.0, "c").unwrap();

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_min(), Some((&1.0, &"b")));

        assert_eq!(heap.pop_min(), Ok((1.0, "b")));
        assert_eq!(heap.pop_min(), Ok((2.0, "c")));
        assert_eq!(heap.pop_min(), Ok((3.0, "a")));
        assert!(heap.is_empty());
    }

    #[test]
    fn pop_single_element() {
        let mut heap = IndexedMinHeap::new();
        heap.push(7, 42u32).unwrap();

        assert_eq!(heap.pop_min(), Ok((7, 42)));
        assert!(!heap.contains(&42));
        assert!(heap.is_empty());
        assert_consistent(&heap);
    }

    #[test]
    fn pop_empty_fails() {
        let mut heap: IndexedMinHeap<u32, f64> = IndexedMinHeap::new();
        assert_eq!(heap.pop_min(), Err(Error::EmptyCollection));
        assert_eq!(heap.peek_min(), None);
    }

    #[test]
    fn duplicate_push_fails() {
        let mut heap = IndexedMinHeap::new();
        heap.push(1.0, "x").unwrap();

        assert!(matches!(
            heap.push(0.5, "x"),
            Err(Error::DuplicateIdentity(_))
        ));
        // The rejected push leaves the heap untouched
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.priority_of(&"x"), Ok(1.0));
    }

    #[test]
    fn lookups_on_absent_key() {
        let mut heap: IndexedMinHeap<&str, f64> = IndexedMinHeap::new();
        heap.push(1.0, "present").unwrap();

        assert!(!heap.contains(&"absent"));
        assert!(matches!(heap.priority_of(&"absent"), Err(Error::NotFound(_))));
        assert!(matches!(
            heap.update_priority(&"absent", 0.0),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn lookups_do_not_mutate() {
        let mut heap = IndexedMinHeap::new();
        for (p, k) in [(5, 'e'), (3, 'c'), (4, 'd'), (1, 'a'), (2, 'b')] {
            heap.push(p, k).unwrap();
        }
        let before = heap.snapshot();

        for _ in 0..3 {
            assert!(heap.contains(&'d'));
            assert_eq!(heap.priority_of(&'d'), Ok(4));
        }

        assert_eq!(heap.snapshot(), before);
    }

    #[test]
    fn decrease_and_increase_priority() {
        let mut heap = IndexedMinHeap::new();
        heap.push(10, "Theo").unwrap();
        heap.push(20, "Chris").unwrap();
        heap.push(5, "Celia").unwrap();
        heap.push(1, "Layla").unwrap();
        heap.push(2, "Artemis").unwrap();
        heap.push(3, "Apollo").unwrap();

        heap.update_priority(&"Theo", 0).unwrap();
        assert_consistent(&heap);
        heap.update_priority(&"Artemis", 25).unwrap();
        assert_consistent(&heap);
        heap.update_priority(&"Apollo", 40).unwrap();
        assert_consistent(&heap);
        heap.update_priority(&"Celia", -1).unwrap();
        assert_consistent(&heap);

        let order: Vec<_> = drain(&mut heap).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            order,
            vec!["Celia", "Theo", "Layla", "Chris", "Artemis", "Apollo"]
        );
    }

    #[test]
    fn unchanged_priority_is_noop() {
        let mut heap = IndexedMinHeap::new();
        for (p, k) in [(1, 0), (2, 1), (3, 2), (4, 3)] {
            heap.push(p, k).unwrap();
        }
        let before = heap.snapshot();

        heap.update_priority(&2, 3).unwrap();

        assert_eq!(heap.snapshot(), before);
    }

    #[test]
    fn sift_down_prefers_left_child_on_tie() {
        let mut heap = IndexedMinHeap::new();
        heap.push(0, "root").unwrap();
        heap.push(5, "left").unwrap();
        heap.push(5, "right").unwrap();
        heap.push(9, "leaf").unwrap();

        assert_eq!(heap.pop_min(), Ok((0, "root")));
        assert_eq!(heap.peek_min(), Some((&5, &"left")));

        let keys: Vec<_> = heap.snapshot().into_iter().map(|n| n.key).collect();
        assert_eq!(keys, vec!["left", "leaf", "right"]);
    }

    #[test]
    fn snapshot_lists_children() {
        let mut heap = IndexedMinHeap::new();
        for (p, k) in [(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')] {
            heap.push(p, k).unwrap();
        }

        let nodes = heap.snapshot();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].children, vec![1, 2]);
        assert_eq!(nodes[1].children, vec![3]);
        assert!(nodes[2].children.is_empty());
        assert!(nodes[3].children.is_empty());
    }

    #[test]
    fn random_updates_keep_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut heap = IndexedMinHeap::with_capacity(500);

        for key in 0..500u32 {
            heap.push(rng.gen_range(0.0..1000.0), key).unwrap();
        }
        for _ in 0..2000 {
            let key = rng.gen_range(0..500u32);
            heap.update_priority(&key, rng.gen_range(0.0..1000.0)).unwrap();
        }
        assert_consistent(&heap);

        let popped = drain(&mut heap);
        assert_eq!(popped.len(), 500);
        assert!(popped.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32, u8),
        Pop,
        Update(u8, i32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (any::<i32>(), 0u8..32).prop_map(|(p, k)| Op::Push(p, k)),
            Just(Op::Pop),
            (0u8..32, any::<i32>()).prop_map(|(k, p)| Op::Update(k, p)),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_after_any_sequence(ops in proptest::collection::vec(op(), 0..200)) {
            let mut heap = IndexedMinHeap::new();
            for op in ops {
                match op {
                    Op::Push(p, k) => {
                        let was_present = heap.contains(&k);
                        prop_assert_eq!(heap.push(p, k).is_err(), was_present);
                    }
                    Op::Pop => {
                        let expected = heap.peek_min().map(|(p, _)| *p);
                        match heap.pop_min() {
                            Ok((p, k)) => {
                                prop_assert_eq!(Some(p), expected);
                                prop_assert!(!heap.contains(&k));
                            }
                            Err(e) => prop_assert_eq!(e, Error::EmptyCollection),
                        }
                    }
                    Op::Update(k, p) => {
                        if heap.contains(&k) {
                            heap.update_priority(&k, p).unwrap();
                            prop_assert_eq!(heap.priority_of(&k), Ok(p));
                        } else {
                            prop_assert!(heap.update_priority(&k, p).is_err());
                        }
                    }
                }
                assert_consistent(&heap);
            }

            let popped = drain(&mut heap);
            prop_assert!(popped.windows(2).all(|w| w[0].0 <= w[1].0));
        }
    }
}
