use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::path::reconstruct;
use crate::algorithm::{SearchStats, ShortestPath, ShortestPathTree};
use crate::data_structures::{BinaryCostHeap, CostQueue, RadixQueue};
use crate::graph::TraversalSource;
use crate::{check_vertex, Cost, Error, Result};

/// Which [`CostQueue`] strategy a [`Dijkstra`] run uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueueKind {
    /// Indexed binary heap, O(log n) per operation
    #[default]
    Binary,
    /// Radix heap, for integer costs with monotone extraction
    Radix,
}

impl QueueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueKind::Binary => "binary",
            QueueKind::Radix => "radix",
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "heap" => Ok(QueueKind::Binary),
            "radix" => Ok(QueueKind::Radix),
            _ => Err(Error::UnknownQueue(s.to_string())),
        }
    }
}

/// Dijkstra's algorithm with a configurable queue strategy
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    queue: QueueKind,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the binary heap
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the queue strategy
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }

    /// Get the configured queue strategy
    pub fn queue(&self) -> QueueKind {
        self.queue
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        match self.queue {
            QueueKind::Binary => "Dijkstra (binary heap)",
            QueueKind::Radix => "Dijkstra (radix heap)",
        }
    }

    /// Shortest path from `source` to `target`
    pub fn shortest_path<G>(&self, graph: &G, source: usize, target: usize) -> Result<ShortestPath>
    where
        G: TraversalSource + ?Sized,
    {
        let (tree, _) = self.run(graph, source, Some(target))?;
        Ok(reconstruct(&tree.parents, &tree.distances, target))
    }

    /// Shortest paths from `source` to every vertex
    pub fn shortest_paths<G>(&self, graph: &G, source: usize) -> Result<ShortestPathTree>
    where
        G: TraversalSource + ?Sized,
    {
        self.shortest_paths_with_stats(graph, source).map(|(tree, _)| tree)
    }

    /// Like [`shortest_paths`](Self::shortest_paths), also returning the work done
    pub fn shortest_paths_with_stats<G>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<(ShortestPathTree, SearchStats)>
    where
        G: TraversalSource + ?Sized,
    {
        self.run(graph, source, None)
    }

    fn run<G>(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> Result<(ShortestPathTree, SearchStats)>
    where
        G: TraversalSource + ?Sized,
    {
        match self.queue {
            QueueKind::Binary => search(graph, &mut BinaryCostHeap::new(), source, target),
            QueueKind::Radix => search(graph, &mut RadixQueue::new(), source, target),
        }
    }
}

/// Runs the label-setting search from `source`.
///
/// With a `target`, the loop stops as soon as the target is popped: its
/// distance is final at that point. Vertices never reached keep `None` for
/// both distance and parent.
pub(crate) fn search<G, Q>(
    graph: &G,
    queue: &mut Q,
    source: usize,
    target: Option<usize>,
) -> Result<(ShortestPathTree, SearchStats)>
where
    G: TraversalSource + ?Sized,
    Q: CostQueue + ?Sized,
{
    let order = graph.order();
    check_vertex(source, order)?;
    if let Some(target) = target {
        check_vertex(target, order)?;
    }
    debug!("search from {source} to {target:?} over {order} vertices");

    let mut distances: Vec<Option<Cost>> = vec![None; order];
    let mut parents: Vec<Option<usize>> = vec![None; order];
    let mut stats = SearchStats::default();

    distances[source] = Some(0);
    queue.bind(order);
    queue.push(source, &distances);
    stats.pushes += 1;

    while let Some(u) = queue.pop_min(&distances) {
        stats.popped += 1;
        if Some(u) == target {
            break;
        }

        let Some(dist_u) = distances[u] else {
            unreachable!("popped vertex {u} has no distance");
        };

        // Relax all outgoing edges
        let flow = graph.visit_edges(u, &mut |w: usize, cost: Cost| {
            stats.examined += 1;
            if cost < 0 {
                trace!("skipping negative edge {u} -> {w} ({cost})");
                stats.skipped_negative += 1;
                return ControlFlow::Continue(());
            }

            let alt = dist_u.saturating_add(cost);
            match distances[w] {
                None => {
                    trace!("discovered {w} via {u} at {alt}");
                    distances[w] = Some(alt);
                    parents[w] = Some(u);
                    queue.push(w, &distances);
                    stats.pushes += 1;
                }
                Some(current) if alt < current => {
                    trace!("improved {w} via {u}: {current} -> {alt}");
                    distances[w] = Some(alt);
                    parents[w] = Some(u);
                    queue.decrease_key(w, &distances);
                    stats.decrease_keys += 1;
                }
                Some(_) => {}
            }
            ControlFlow::Continue(())
        });
        if flow.is_break() {
            unreachable!("edge visitor of {u} never breaks");
        }
    }

    debug!(
        "search from {source} done: popped {}, examined {}, pushes {}, decrease-keys {}, skipped {} negative",
        stats.popped, stats.examined, stats.pushes, stats.decrease_keys, stats.skipped_negative
    );

    Ok((
        ShortestPathTree {
            source,
            distances,
            parents,
        },
        stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;

    fn diamond() -> AdjacencyList {
        AdjacencyList::from_edges(4, &[(0, 1, 4), (0, 2, 1), (2, 1, 1), (1, 3, 1)]).unwrap()
    }

    #[test]
    fn queue_kind_parses_and_displays() {
        assert_eq!("radix".parse::<QueueKind>().unwrap(), QueueKind::Radix);
        assert_eq!("Binary".parse::<QueueKind>().unwrap(), QueueKind::Binary);
        assert!(matches!("fib".parse::<QueueKind>(), Err(Error::UnknownQueue(_))));
        assert_eq!(QueueKind::Radix.to_string(), "radix");
    }

    #[test]
    fn queue_kind_deserializes_lowercase() {
        let kind: QueueKind = serde_json::from_str("\"radix\"").unwrap();
        assert_eq!(kind, QueueKind::Radix);
    }

    #[test]
    fn stats_count_the_work() {
        let (_, stats) = Dijkstra::new().shortest_paths_with_stats(&diamond(), 0).unwrap();

        assert_eq!(stats.popped, 4);
        assert_eq!(stats.examined, 4);
        assert_eq!(stats.pushes, 4);
        assert_eq!(stats.decrease_keys, 1);
        assert_eq!(stats.skipped_negative, 0);
    }

    #[test]
    fn early_exit_stops_at_target() {
        let mut queue = BinaryCostHeap::new();
        let (tree, stats) = search(&diamond(), &mut queue, 0, Some(2)).unwrap();

        // 0 then 2 are popped; 2's edges are never examined
        assert_eq!(stats.popped, 2);
        assert_eq!(stats.examined, 2);
        assert_eq!(tree.distance(2), Some(1));
        assert_eq!(tree.distance(3), None);
    }

    #[test]
    fn negative_edges_are_examined_but_not_relaxed() {
        let g = AdjacencyList::from_edges(3, &[(0, 1, -2), (0, 2, 3), (2, 1, -1)]).unwrap();
        let (tree, stats) = Dijkstra::new().shortest_paths_with_stats(&g, 0).unwrap();

        assert_eq!(stats.examined, 3);
        assert_eq!(stats.skipped_negative, 2);
        assert_eq!(stats.pushes, 2);
        assert_eq!(tree.distance(1), None);
    }

    #[test]
    fn builder_sets_queue_strategy() {
        assert_eq!(Dijkstra::new().queue(), QueueKind::Binary);
        assert_eq!(Dijkstra::new().with_queue(QueueKind::Radix).queue(), QueueKind::Radix);
    }

    #[test]
    fn strategies_agree() {
        let g = diamond();
        let binary = Dijkstra::new().shortest_paths(&g, 0).unwrap();
        let radix = Dijkstra::new().with_queue(QueueKind::Radix).shortest_paths(&g, 0).unwrap();
        assert_eq!(binary.distances, radix.distances);
    }

    #[test]
    fn out_of_range_target_fails_fast() {
        let err = Dijkstra::new().shortest_path(&diamond(), 0, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 4, order: 4 }));
    }
}
