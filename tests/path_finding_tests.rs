use labelset::algorithm::{shortest_path, shortest_paths};
use labelset::graph::{AdjacencyList, TraversalSource};
use labelset::{Dijkstra, Error, QueueKind};

// Vertices 0..4 with a detour through 2 beating the direct edge 0 -> 1,
// plus an isolated vertex 4
fn create_test_graph() -> AdjacencyList {
    AdjacencyList::from_edges(5, &[(0, 1, 4), (0, 2, 1), (2, 1, 1), (1, 3, 1)]).unwrap()
}

// Test helper function to create a grid graph with unit costs
fn create_test_grid(width: usize, height: usize) -> AdjacencyList {
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                edges.push((vertex, vertex + 1, 1));
                edges.push((vertex + 1, vertex, 1));
            }
            if y + 1 < height {
                edges.push((vertex, vertex + width, 1));
                edges.push((vertex + width, vertex, 1));
            }
        }
    }
    AdjacencyList::from_edges(width * height, &edges).unwrap()
}

#[test]
fn test_detour_is_shorter() {
    let graph = create_test_graph();
    let result = shortest_path(&graph, 0, 3).unwrap();

    assert_eq!(result.path, vec![0, 2, 1, 3]);
    assert_eq!(result.distance, Some(3));
}

#[test]
fn test_disconnected_vertex() {
    let graph = create_test_graph();
    let result = shortest_path(&graph, 0, 4).unwrap();

    assert!(result.path.is_empty());
    assert_eq!(result.distance_or_sentinel(), -1);
    assert!(!result.is_reachable());
}

#[test]
fn test_source_equals_target() {
    let graph = create_test_graph();
    let result = shortest_path(&graph, 0, 0).unwrap();

    assert_eq!(result.path, vec![0]);
    assert_eq!(result.distance, Some(0));
}

#[test]
fn test_negative_edge_is_ignored() {
    let with_negative =
        AdjacencyList::from_edges(4, &[(0, 1, 4), (0, 2, 1), (2, 1, -1), (2, 3, 5), (1, 3, 1)]).unwrap();
    let without = AdjacencyList::from_edges(4, &[(0, 1, 4), (0, 2, 1), (2, 3, 5), (1, 3, 1)]).unwrap();

    let a = shortest_paths(&with_negative, 0).unwrap();
    let b = shortest_paths(&without, 0).unwrap();

    assert_eq!(a.distances, b.distances);
    assert_eq!(a.parents, b.parents);
    assert_eq!(a.distance(1), Some(4));
}

#[test]
fn test_negative_edge_to_undiscovered_vertex() {
    let graph = AdjacencyList::from_edges(2, &[(0, 1, -3)]).unwrap();
    let result = shortest_path(&graph, 0, 1).unwrap();

    assert!(result.path.is_empty());
    assert_eq!(result.distance, None);
}

#[test]
fn test_all_destinations_tree() {
    let graph = AdjacencyList::from_edges(4, &[(0, 1, 4), (0, 2, 1), (2, 1, 1), (1, 3, 1)]).unwrap();
    let tree = shortest_paths(&graph, 0).unwrap();
    let (dist, parent) = tree.to_sentinel_arrays();

    assert_eq!(dist, vec![0, 2, 1, 3]);
    assert_eq!(parent, vec![-1, 2, 0, 1]);
    assert_eq!(tree.reachable_count(), 4);
    assert_eq!(tree.path_to(3).unwrap().path, vec![0, 2, 1, 3]);
}

#[test]
fn test_tree_path_to_unreached_vertex() {
    let tree = shortest_paths(&create_test_graph(), 0).unwrap();
    let path = tree.path_to(4).unwrap();

    assert!(path.path.is_empty());
    assert_eq!(tree.parent(4), None);
    assert!(matches!(tree.path_to(5), Err(Error::InvalidVertex { vertex: 5, .. })));
}

#[test]
fn test_invalid_source() {
    let graph = create_test_graph();
    assert!(matches!(
        shortest_paths(&graph, 9),
        Err(Error::InvalidVertex { vertex: 9, order: 5 })
    ));
    assert!(matches!(
        shortest_path(&graph, 9, 0),
        Err(Error::InvalidVertex { vertex: 9, order: 5 })
    ));
}

#[test]
fn test_zero_cost_edges() {
    let graph = AdjacencyList::from_edges(4, &[(0, 1, 0), (1, 2, 0), (2, 3, 0)]).unwrap();
    let result = shortest_path(&graph, 0, 3).unwrap();

    assert_eq!(result.path, vec![0, 1, 2, 3]);
    assert_eq!(result.distance, Some(0));
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10);

    for kind in [QueueKind::Binary, QueueKind::Radix] {
        let dijkstra = Dijkstra::new().with_queue(kind);
        let result = dijkstra.shortest_path(&graph, 0, 99).unwrap();

        assert_eq!(result.distance, Some(18), "{}", dijkstra.name());
        assert_eq!(result.path.len(), 19);
        assert_eq!(result.path[0], 0, "Path should start at source");
        assert_eq!(*result.path.last().unwrap(), 99, "Path should end at target");

        // Verify path continuity
        for pair in result.path.windows(2) {
            assert!(graph.edge_cost(pair[0], pair[1]).is_some(), "Path should only use existing edges");
        }
    }
}

#[test]
fn test_plain_adjacency_lists() {
    let lists: Vec<Vec<(usize, i64)>> = vec![vec![(1, 2), (2, 7)], vec![(2, 3)], vec![]];
    let result = shortest_path(&lists, 0, 2).unwrap();

    assert_eq!(lists.order(), 3);
    assert_eq!(result.path, vec![0, 1, 2]);
    assert_eq!(result.distance, Some(5));
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = create_test_grid(6, 4);
    let first = shortest_paths(&graph, 7).unwrap();
    let second = shortest_paths(&graph, 7).unwrap();

    assert_eq!(first, second);
}
