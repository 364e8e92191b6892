//! Labelset - label-setting single-source shortest paths
//!
//! This library implements Dijkstra's method over any graph that can enumerate
//! the outgoing edges of a vertex. The priority queue driving the search is a
//! pluggable strategy: a binary heap is used by default, and a radix heap is
//! provided for non-negative integer costs.
//!
//! Edges with a negative cost are never followed. The time complexity with the
//! binary heap is O((|E| + |V|)⋅log|V|).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, QueueKind},
    shortest_path, shortest_path_with_queue, shortest_paths, shortest_paths_with_queue,
    SearchStats, ShortestPath, ShortestPathTree,
};
pub use data_structures::{BinaryCostHeap, CostQueue, RadixQueue};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, TraversalSource};

/// Cost of an edge, and length of a path.
///
/// Wide enough that summing many edge costs does not overflow in practice.
pub type Cost = i64;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {vertex} (graph order is {order})")]
    InvalidVertex { vertex: usize, order: usize },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Unknown queue strategy: {0}")]
    UnknownQueue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::InvalidVertex`] unless `vertex` lies in `[0, order)`.
pub(crate) fn check_vertex(vertex: usize, order: usize) -> Result<()> {
    if vertex < order {
        Ok(())
    } else {
        Err(Error::InvalidVertex { vertex, order })
    }
}
