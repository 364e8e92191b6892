pub mod dijkstra;
mod path;
pub mod result;

pub use dijkstra::{Dijkstra, QueueKind};
pub use result::{SearchStats, ShortestPath, ShortestPathTree};

use crate::data_structures::{BinaryCostHeap, CostQueue};
use crate::graph::TraversalSource;
use crate::Result;

/// Computes a shortest path from `source` to `target` using the binary heap.
/// Only edges with non-negative costs are followed.
///
/// An unreachable target is not an error: the path is empty and the distance
/// is `None`.
pub fn shortest_path<G>(graph: &G, source: usize, target: usize) -> Result<ShortestPath>
where
    G: TraversalSource + ?Sized,
{
    shortest_path_with_queue(graph, &mut BinaryCostHeap::new(), source, target)
}

/// Computes the shortest paths from `source` to all other vertices using the
/// binary heap. Only edges with non-negative costs are followed.
pub fn shortest_paths<G>(graph: &G, source: usize) -> Result<ShortestPathTree>
where
    G: TraversalSource + ?Sized,
{
    shortest_paths_with_queue(graph, &mut BinaryCostHeap::new(), source)
}

/// Like [`shortest_path`], driven by a caller supplied queue strategy
pub fn shortest_path_with_queue<G, Q>(
    graph: &G,
    queue: &mut Q,
    source: usize,
    target: usize,
) -> Result<ShortestPath>
where
    G: TraversalSource + ?Sized,
    Q: CostQueue + ?Sized,
{
    let (tree, _) = dijkstra::search(graph, queue, source, Some(target))?;
    Ok(path::reconstruct(&tree.parents, &tree.distances, target))
}

/// Like [`shortest_paths`], driven by a caller supplied queue strategy
pub fn shortest_paths_with_queue<G, Q>(graph: &G, queue: &mut Q, source: usize) -> Result<ShortestPathTree>
where
    G: TraversalSource + ?Sized,
    Q: CostQueue + ?Sized,
{
    dijkstra::search(graph, queue, source, None).map(|(tree, _)| tree)
}
