use std::fmt::Debug;

use crate::Cost;

/// Priority queue of vertices keyed by their current best distance.
///
/// The queue does not own the distances. Every call lends it the search's
/// distance slice, and the priority of a queued vertex `v` is `dist[v]`, which
/// is always `Some` while `v` is queued. Callers update `dist[v]` before
/// calling [`push`](CostQueue::push) or [`decrease_key`](CostQueue::decrease_key).
///
/// Misuse (pushing a queued vertex, decreasing an absent one) breaks the
/// search's own bookkeeping and panics.
pub trait CostQueue: Debug {
    /// Clears the queue and prepares it for vertices in `0..order`
    fn bind(&mut self, order: usize);

    /// Inserts a vertex that is not yet queued
    fn push(&mut self, vertex: usize, dist: &[Option<Cost>]);

    /// Restores order after `dist[vertex]` was lowered for a queued vertex
    fn decrease_key(&mut self, vertex: usize, dist: &[Option<Cost>]);

    /// Removes and returns a vertex of smallest distance. Ties are broken arbitrarily.
    fn pop_min(&mut self, dist: &[Option<Cost>]) -> Option<usize>;

    /// Returns the number of queued vertices
    fn len(&self) -> usize;

    /// Returns true if no vertex is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<Q: CostQueue + ?Sized> CostQueue for &mut Q {
    fn bind(&mut self, order: usize) {
        (**self).bind(order)
    }

    fn push(&mut self, vertex: usize, dist: &[Option<Cost>]) {
        (**self).push(vertex, dist)
    }

    fn decrease_key(&mut self, vertex: usize, dist: &[Option<Cost>]) {
        (**self).decrease_key(vertex, dist)
    }

    fn pop_min(&mut self, dist: &[Option<Cost>]) -> Option<usize> {
        (**self).pop_min(dist)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

const ABSENT: usize = usize::MAX;

/// Indexed binary min-heap over vertices
///
/// `positions[v]` is the slot of `v` in `heap`, or `ABSENT`, so that
/// decrease-key can find the vertex in O(1) and sift it up in O(log n).
#[derive(Debug, Default, Clone)]
pub struct BinaryCostHeap {
    /// Heap-ordered vertices
    heap: Vec<usize>,

    /// Slot of each vertex in `heap`
    positions: Vec<usize>,
}

impl BinaryCostHeap {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryCostHeap::default()
    }

    /// Returns true if `vertex` is queued
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions.get(vertex).is_some_and(|&p| p != ABSENT)
    }

    fn place(&mut self, vertex: usize, slot: usize) {
        self.heap[slot] = vertex;
        self.positions[vertex] = slot;
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (va, vb) = (self.heap[a], self.heap[b]);
        self.place(va, b);
        self.place(vb, a);
    }

    fn sift_up(&mut self, mut slot: usize, dist: &[Option<Cost>]) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if dist[self.heap[parent]] <= dist[self.heap[slot]] {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize, dist: &[Option<Cost>]) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && dist[self.heap[left]] < dist[self.heap[smallest]] {
                smallest = left;
            }
            if right < len && dist[self.heap[right]] < dist[self.heap[smallest]] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl CostQueue for BinaryCostHeap {
    fn bind(&mut self, order: usize) {
        self.heap.clear();
        self.positions.clear();
        self.positions.resize(order, ABSENT);
    }

    fn push(&mut self, vertex: usize, dist: &[Option<Cost>]) {
        assert!(!self.contains(vertex), "vertex {vertex} is already queued");
        debug_assert!(dist[vertex].is_some(), "queued vertex {vertex} has no distance");

        let slot = self.heap.len();
        self.heap.push(vertex);
        self.positions[vertex] = slot;
        self.sift_up(slot, dist);
    }

    fn decrease_key(&mut self, vertex: usize, dist: &[Option<Cost>]) {
        assert!(self.contains(vertex), "vertex {vertex} is not queued");
        self.sift_up(self.positions[vertex], dist);
    }

    fn pop_min(&mut self, dist: &[Option<Cost>]) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.positions[min] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0, dist);
        }
        Some(min)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
