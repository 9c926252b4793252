use std::iter::FromIterator;

/// Ordering used by a `BinaryHeap` to decide which of two entries sits closer to the root.
pub trait Compare<T> {
    /// True when `a` has strictly higher priority than `b`.
    fn greater_than(&self, a: &T, b: &T) -> bool;
}

/// Max-heap ordering through `PartialOrd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greater;

impl<T: PartialOrd> Compare<T> for Greater {
    fn greater_than(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Min-heap ordering: the smallest entry is treated as highest priority.
#[derive(Debug, Default, Clone, Copy)]
pub struct Less;

impl<T: PartialOrd> Compare<T> for Less {
    fn greater_than(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn greater_than(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Priority queue stored as a complete binary tree in a dense vector.
///
/// The children of index `j` live at `2j + 1` and `2j + 2`; no entry is.
/// ever ranked above its parent by the comparator.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = Greater> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        BinaryHeap {
            data: Vec::new(),
            cmp: C::default(),
        }
    }
}

impl<T: PartialOrd> BinaryHeap<T> {
    pub fn new() -> Self {
        BinaryHeap::with_comparator(Greater)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
            cmp: Greater,
        }
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        BinaryHeap {
            data: Vec::new(),
            cmp,
        }
    }

    /// Build a heap in place from arbitrary data.
    pub fn from_vec_with(data: Vec<T>, cmp: C) -> Self {
        let mut heap = BinaryHeap { data, cmp };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in storage order, root first.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The highest-priority entry, or None if the heap is empty.
    pub fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the highest-priority entry, or None if the heap is empty.
    pub fn remove_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let len = self.data.len();
        self.data.swap(0, len - 1);
        let result = self.data.pop();
        self.sift_down(0);
        result
    }

    /// Drain the heap, highest priority first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.remove_max() {
            sorted.push(value);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        /* Propagate the element at `index` up through the heap as needed */
        while index > 0 {
            let parent_index = (index - 1) / 2;
            if !self
                .cmp
                .greater_than(&self.data[index], &self.data[parent_index])
            {
                break;
            }
            self.data.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        /* Fix the heap property when a new element is at `index` */
        let len = self.data.len();
        loop {
            let child_1_idx = 2 * index + 1;
            let child_2_idx = 2 * index + 2;
            if child_1_idx >= len {
                break;
            }
            // left wins unless right is strictly bigger
            let big_child = if child_2_idx < len
                && self
                    .cmp
                    .greater_than(&self.data[child_2_idx], &self.data[child_1_idx])
            {
                child_2_idx
            } else {
                child_1_idx
            };
            if !self
                .cmp
                .greater_than(&self.data[big_child], &self.data[index])
            {
                break;
            }
            self.data.swap(index, big_child);
            index = big_child;
        }
    }
}

impl<T: PartialOrd> From<Vec<T>> for BinaryHeap<T> {
    fn from(v: Vec<T>) -> Self {
        BinaryHeap::from_vec_with(v, Greater)
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinaryHeap::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i16),
        RemoveMax,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i16>().prop_map(Op::Insert),
            Just(Op::RemoveMax),
        ]
    }

    fn holds_heap_property<T, C: Compare<T>>(h: &BinaryHeap<T, C>) -> bool {
        let data = h.as_slice();
        (0..data.len()).all(|j| {
            let left = 2 * j + 1;
            let right = 2 * j + 2;
            (left >= data.len() || !h.cmp.greater_than(&data[left], &data[j]))
                && (right >= data.len() || !h.cmp.greater_than(&data[right], &data[j]))
        })
    }

    proptest! {
        /// Heap property and size law hold after every mutation.
        #[test]
        fn invariant_after_every_op(ops in prop::collection::vec(op(), 0..300)) {
            let mut h = BinaryHeap::new();
            for op in ops {
                let before = h.len();
                match op {
                    Op::Insert(v) => {
                        h.insert(v);
                        prop_assert_eq!(h.len(), before + 1);
                    }
                    Op::RemoveMax => {
                        let removed = h.remove_max();
                        prop_assert_eq!(removed.is_some(), before > 0);
                        prop_assert_eq!(h.len(), before.saturating_sub(1));
                    }
                }
                prop_assert!(holds_heap_property(&h));
                prop_assert_eq!(h.is_empty(), h.len() == 0);
            }
        }

        /// Draining yields a non-increasing sequence of the inserted values.
        #[test]
        fn extraction_is_sorted(values in prop::collection::vec(any::<i32>(), 0..500)) {
            let mut h = BinaryHeap::new();
            for &v in &values {
                h.insert(v);
            }
            let drained = h.into_sorted_vec();
            let mut expected = values;
            expected.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(drained, expected);
        }

        /// Insertion order does not change the drained sequence.
        #[test]
        fn permutation_round_trip(
            values in prop::collection::vec(0u8..16, 0..100)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let (original, shuffled) = values;
            let a: BinaryHeap<u8> = original.into_iter().collect();
            let b: BinaryHeap<u8> = shuffled.into_iter().collect();
            prop_assert_eq!(a.into_sorted_vec(), b.into_sorted_vec());
        }

        /// Heapify agrees with repeated insertion.
        #[test]
        fn heapify_is_a_heap(values in prop::collection::vec(any::<i64>(), 0..300)) {
            let h = BinaryHeap::from_vec_with(values, Less);
            prop_assert!(holds_heap_property(&h));
        }
    }
}
