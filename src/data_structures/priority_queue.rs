use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-priority queue of vertex indices keyed by cost.
///
/// Entries with equal cost pop in ascending index order, so a heap-driven run
/// visits vertices in the same order as a linear scan over the enumeration.
#[derive(Debug)]
pub struct CostQueue {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
}

impl CostQueue {
    /// Creates a new empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        CostQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Pushes a vertex index with the given cost. Older entries for the same
    /// index are not removed; callers skip them when popped.
    pub fn push(&mut self, index: usize, cost: f64) {
        self.heap.push(Reverse((OrderedFloat(cost), index)));
    }

    /// Removes the entry with the lowest cost
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        self.heap
            .pop()
            .map(|Reverse((cost, index))| (index, cost.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_cost_then_lowest_index() {
        let mut q = CostQueue::with_capacity(4);
        q.push(3, 2.0);
        q.push(1, 5.0);
        q.push(2, 2.0);
        q.push(0, 7.5);

        assert_eq!(q.pop(), Some((2, 2.0)));
        assert_eq!(q.pop(), Some((3, 2.0)));
        assert_eq!(q.pop(), Some((1, 5.0)));
        assert_eq!(q.pop(), Some((0, 7.5)));
        assert_eq!(q.pop(), None);
    }
}
