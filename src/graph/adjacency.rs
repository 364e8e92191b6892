use std::fs;
use std::ops::ControlFlow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::traits::{EdgeVisitor, TraversalSource};
use crate::{Cost, Error, Result};

/// A read-only directed graph stored as compressed adjacency lists
///
/// The outgoing edges of vertex `v` occupy `targets[offsets[v]..offsets[v + 1]]`
/// and the matching slice of `costs`.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    /// Start of each vertex's edge range, plus one trailing end marker
    offsets: Vec<usize>,

    /// Edge endpoints
    targets: Vec<usize>,

    /// Edge costs, parallel to `targets`
    costs: Vec<Cost>,
}

impl AdjacencyList {
    /// Builds a graph with `order` vertices from `(from, to, cost)` triples.
    ///
    /// Negative costs are stored as given; the search skips them.
    pub fn from_edges(order: usize, edges: &[(usize, usize, Cost)]) -> Result<Self> {
        let mut out_degree = vec![0_usize; order];
        for &(from, to, _) in edges {
            if from >= order || to >= order {
                return Err(Error::InvalidEdge(from, to));
            }
            out_degree[from] += 1;
        }

        let mut offsets = vec![0_usize; order + 1];
        for v in 0..order {
            offsets[v + 1] = offsets[v] + out_degree[v];
        }

        let mut targets = vec![0_usize; edges.len()];
        let mut costs = vec![0; edges.len()];
        let mut cursor = offsets[..order].to_vec();

        for &(from, to, cost) in edges {
            let idx = cursor[from];
            cursor[from] += 1;
            targets[idx] = to;
            costs[idx] = cost;
        }

        Ok(AdjacencyList {
            offsets,
            targets,
            costs,
        })
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Iterates over the `(neighbor, cost)` pairs leaving `vertex`
    pub fn out_edges(&self, vertex: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        let range = self.offsets[vertex]..self.offsets[vertex + 1];
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.costs[range].iter().copied())
    }

    /// Gets the cost of the cheapest edge from `from` to `to`, if any
    pub fn edge_cost(&self, from: usize, to: usize) -> Option<Cost> {
        self.out_edges(from)
            .filter(|&(w, _)| w == to)
            .map(|(_, c)| c)
            .min()
    }
}

impl TraversalSource for AdjacencyList {
    fn order(&self) -> usize {
        self.offsets.len() - 1
    }

    fn visit_edges(&self, vertex: usize, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()> {
        for (neighbor, cost) in self.out_edges(vertex) {
            visit(neighbor, cost)?;
        }
        ControlFlow::Continue(())
    }
}

/// JSON description of a graph, as read by the command line tool
///
/// ```json
/// { "order": 4, "edges": [[0, 1, 4], [0, 2, 1], [2, 1, 1], [1, 3, 1]] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    pub order: usize,
    #[serde(default)]
    pub edges: Vec<(usize, usize, Cost)>,
}

impl GraphFile {
    /// Reads and parses a graph file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses a graph from its JSON text
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the adjacency lists described by this file
    pub fn build(&self) -> Result<AdjacencyList> {
        AdjacencyList::from_edges(self.order, &self.edges)
    }
}
