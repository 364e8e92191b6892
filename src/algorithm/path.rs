use crate::algorithm::ShortestPath;
use crate::Cost;

/// Follows `parents` from `target` back to the root and returns the path in
/// source to target order. An unreached target yields an empty path.
pub(crate) fn reconstruct(
    parents: &[Option<usize>],
    distances: &[Option<Cost>],
    target: usize,
) -> ShortestPath {
    let Some(distance) = distances[target] else {
        return ShortestPath::unreachable();
    };

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = parents[current] {
        path.push(prev);
        current = prev;
        // parents form a tree, so a longer walk means a cycle
        assert!(path.len() <= parents.len(), "cycle in predecessor links at vertex {current}");
    }
    path.reverse();

    ShortestPath {
        path,
        distance: Some(distance),
    }
}
