use crate::data_structures::CostQueue;
use crate::Cost;

/// Radix heap for non-negative integer costs
///
/// Extraction must be monotone: every key pushed is at least the last key
/// popped, which holds for Dijkstra over non-negative edges. Bucket `i > 0`
/// holds keys whose highest bit differing from `last` is bit `i - 1`, so each
/// entry is redistributed at most 64 times.
///
/// Decrease-key inserts a second entry for the vertex; entries whose key no
/// longer matches the vertex's distance are dropped when they surface.
#[derive(Debug, Clone)]
pub struct RadixQueue {
    buckets: [Vec<(u64, usize)>; 65],
    /// Key of the most recently popped entry
    last: u64,
    /// Whether each vertex is currently queued
    queued: Vec<bool>,
    /// Number of queued vertices, not entries
    len: usize,
}

impl RadixQueue {
    /// Creates a new empty radix queue
    pub fn new() -> Self {
        RadixQueue {
            buckets: std::array::from_fn(|_| Vec::new()),
            last: 0,
            queued: Vec::new(),
            len: 0,
        }
    }

    fn insert(&mut self, vertex: usize, dist: &[Option<Cost>]) {
        let key = key_of(vertex, dist);
        assert!(key >= self.last, "radix queue key {key} is below last popped key {}", self.last);
        self.buckets[bucket_index(self.last, key)].push((key, vertex));
    }

    /// Moves the smallest non-empty bucket into bucket 0 and friends
    fn refill(&mut self) -> bool {
        let Some(idx) = (1..self.buckets.len()).find(|&i| !self.buckets[i].is_empty()) else {
            return false;
        };

        let entries = std::mem::take(&mut self.buckets[idx]);
        self.last = entries.iter().map(|&(key, _)| key).min().unwrap_or(self.last);
        for (key, vertex) in entries {
            self.buckets[bucket_index(self.last, key)].push((key, vertex));
        }
        true
    }
}

impl Default for RadixQueue {
    fn default() -> Self {
        RadixQueue::new()
    }
}

impl CostQueue for RadixQueue {
    fn bind(&mut self, order: usize) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.last = 0;
        self.queued.clear();
        self.queued.resize(order, false);
        self.len = 0;
    }

    fn push(&mut self, vertex: usize, dist: &[Option<Cost>]) {
        assert!(!self.queued[vertex], "vertex {vertex} is already queued");
        self.insert(vertex, dist);
        self.queued[vertex] = true;
        self.len += 1;
    }

    fn decrease_key(&mut self, vertex: usize, dist: &[Option<Cost>]) {
        assert!(self.queued[vertex], "vertex {vertex} is not queued");
        self.insert(vertex, dist);
    }

    fn pop_min(&mut self, dist: &[Option<Cost>]) -> Option<usize> {
        while self.len > 0 {
            if self.buckets[0].is_empty() && !self.refill() {
                break;
            }
            let Some((key, vertex)) = self.buckets[0].pop() else {
                continue;
            };
            if !self.queued[vertex] || dist[vertex] != Cost::try_from(key).ok() {
                continue;
            }
            self.queued[vertex] = false;
            self.len -= 1;
            return Some(vertex);
        }
        None
    }

    fn len(&self) -> usize {
        self.len
    }
}

fn key_of(vertex: usize, dist: &[Option<Cost>]) -> u64 {
    match dist[vertex].map(u64::try_from) {
        Some(Ok(key)) => key,
        Some(Err(_)) => panic!("radix queue requires non-negative costs (vertex {vertex})"),
        None => panic!("queued vertex {vertex} has no distance"),
    }
}

#[inline]
fn bucket_index(last: u64, key: u64) -> usize {
    if key == last {
        0
    } else {
        (64 - (key ^ last).leading_zeros()) as usize
    }
}
