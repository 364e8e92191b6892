use std::ops::ControlFlow;

use crate::Cost;

/// Callback receiving `(neighbor, cost)` for each outgoing edge.
///
/// Returning [`ControlFlow::Break`] skips the remaining edges of the vertex.
pub type EdgeVisitor<'a> = dyn FnMut(usize, Cost) -> ControlFlow<()> + 'a;

/// A graph that the shortest path search can walk.
///
/// Vertices are the dense indices `0..order()`. Implementations must allow
/// concurrent read-only enumeration if several searches share one graph.
pub trait TraversalSource {
    /// Returns the number of vertices in the graph
    fn order(&self) -> usize;

    /// Calls `visit` once per outgoing edge of `vertex`, in any order.
    ///
    /// Returns `Break` if the visitor stopped the enumeration early.
    fn visit_edges(&self, vertex: usize, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()>;
}

impl<T> TraversalSource for &T
where
    T: TraversalSource + ?Sized,
{
    fn order(&self) -> usize {
        (**self).order()
    }

    fn visit_edges(&self, vertex: usize, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()> {
        (**self).visit_edges(vertex, visit)
    }
}

/// Plain adjacency lists: `self[v]` holds the `(neighbor, cost)` pairs of `v`.
impl TraversalSource for Vec<Vec<(usize, Cost)>> {
    fn order(&self) -> usize {
        self.len()
    }

    fn visit_edges(&self, vertex: usize, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()> {
        for &(neighbor, cost) in &self[vertex] {
            visit(neighbor, cost)?;
        }
        ControlFlow::Continue(())
    }
}
