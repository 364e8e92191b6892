use serde::Serialize;

use crate::algorithm::path::reconstruct;
use crate::{check_vertex, Cost, Result};

/// Shortest path tree rooted at a source vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    /// Source vertex ID
    pub source: usize,

    /// Distances from source to each vertex, `None` if unreached
    pub distances: Vec<Option<Cost>>,

    /// Predecessor of each vertex on a shortest path from the source
    pub parents: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// Number of vertices the tree covers
    pub fn order(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, vertex: usize) -> Option<Cost> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Walks the predecessors back from `target` to build its path
    pub fn path_to(&self, target: usize) -> Result<ShortestPath> {
        check_vertex(target, self.order())?;
        Ok(reconstruct(&self.parents, &self.distances, target))
    }

    /// The distance and parent arrays with -1 marking unreached vertices
    pub fn to_sentinel_arrays(&self) -> (Vec<Cost>, Vec<i64>) {
        let dist = self.distances.iter().map(|d| d.unwrap_or(-1)).collect();
        let parent = self
            .parents
            .iter()
            .map(|p| p.map_or(-1, |v| v as i64))
            .collect();
        (dist, parent)
    }
}

/// A single source to target path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Vertices from source to target inclusive; empty if unreachable
    pub path: Vec<usize>,

    /// Total cost of `path`, `None` if the target cannot be reached
    pub distance: Option<Cost>,
}

impl ShortestPath {
    pub(crate) fn unreachable() -> Self {
        ShortestPath {
            path: Vec::new(),
            distance: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// The distance, or -1 if the target cannot be reached
    pub fn distance_or_sentinel(&self) -> Cost {
        self.distance.unwrap_or(-1)
    }
}

/// Work counters of a single search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices removed from the queue
    pub popped: usize,
    /// Edges read from popped vertices, negative ones included
    pub examined: usize,
    /// Vertices discovered and pushed
    pub pushes: usize,
    /// Strict improvements to already queued vertices
    pub decrease_keys: usize,
    /// Edges ignored because their cost is negative
    pub skipped_negative: usize,
}
