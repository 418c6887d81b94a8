//! Cost-indexed priority queue for the A* search.
//!
//! The structure keeps full states out of the heap comparator path: a
//! binary min-heap orders scalar f-costs only, while the state payloads
//! live in side buckets keyed by cost. Retrieval pops the minimum cost and
//! takes the most recently pushed state from the matching bucket, so ties
//! among equal-cost states break last-in-first-out. The tie-break decides
//! which of several optimal-length solutions the search returns, never
//! whether the returned length is optimal.
use crate::engine::PuzzleState;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Priority queue yielding pending states in non-decreasing f-cost order.
///
/// Invariant: every cost value physically present in the heap has a bucket
/// holding at least one not-yet-retrieved state; `pop_min` removes one heap
/// entry and one bucket entry in lock-step.
#[derive(Debug, Default)]
pub struct CostIndexedQueue {
    // Min-heap of f-costs; duplicate values appear once per pending state.
    costs: BinaryHeap<Reverse<u32>>,
    // f-cost -> states carrying that cost, oldest first.
    buckets: HashMap<u32, Vec<PuzzleState>>,
}

impl CostIndexedQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a state, keyed by its current f-cost.
    pub fn push(&mut self, state: PuzzleState) {
        let cost = state.f_cost();
        self.costs.push(Reverse(cost));
        self.buckets.entry(cost).or_default().push(state);
    }

    /// Removes and returns a state with the minimum pending f-cost, or
    /// `None` when the queue is empty.
    ///
    /// Among states sharing that cost, the most recently pushed one is
    /// returned first.
    pub fn pop_min(&mut self) -> Option<PuzzleState> {
        let Reverse(cost) = self.costs.pop()?;
        let bucket = self
            .buckets
            .get_mut(&cost)
            .expect("every heap cost has a matching bucket");
        let state = bucket
            .pop()
            .expect("buckets never outlive their last state");
        if bucket.is_empty() {
            self.buckets.remove(&cost);
        }
        Some(state)
    }

    /// Number of pending states.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` when no states are pending.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
