use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::AdjacencyList;
use crate::Cost;

/// Generates a random directed graph with `n` vertices and `m` edges.
/// Costs are drawn from `0..=max_cost`; self-loops are not generated.
pub fn random_graph(n: usize, m: usize, max_cost: Cost, seed: u64) -> AdjacencyList {
    assert!(n >= 2, "n must be at least 2");
    assert!(max_cost >= 0, "max_cost must be non-negative");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(m);

    while edges.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            edges.push((u, v, rng.gen_range(0..=max_cost)));
        }
    }

    build(n, &edges)
}

/// Generates a `width * height` grid where every cell links to its four
/// neighbours in both directions with a random cost in `1..=max_cost`.
pub fn grid_graph(width: usize, height: usize, max_cost: Cost, seed: u64) -> AdjacencyList {
    assert!(max_cost >= 1, "max_cost must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(4 * width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((index(x, y), index(x + 1, y), rng.gen_range(1..=max_cost)));
                edges.push((index(x + 1, y), index(x, y), rng.gen_range(1..=max_cost)));
            }
            if y + 1 < height {
                edges.push((index(x, y), index(x, y + 1), rng.gen_range(1..=max_cost)));
                edges.push((index(x, y + 1), index(x, y), rng.gen_range(1..=max_cost)));
            }
        }
    }

    build(width * height, &edges)
}

/// Like [`random_graph`], but roughly one edge in `negative_every` gets a
/// negative cost.
pub fn random_graph_with_negatives(
    n: usize,
    m: usize,
    max_cost: Cost,
    negative_every: u32,
    seed: u64,
) -> Vec<(usize, usize, Cost)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(m);

    while edges.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let cost = if rng.gen_ratio(1, negative_every.max(1)) {
            -rng.gen_range(1..=max_cost.max(1))
        } else {
            rng.gen_range(0..=max_cost)
        };
        edges.push((u, v, cost));
    }

    edges
}

fn build(n: usize, edges: &[(usize, usize, Cost)]) -> AdjacencyList {
    match AdjacencyList::from_edges(n, edges) {
        Ok(graph) => graph,
        Err(e) => unreachable!("generated edge out of range: {e}"),
    }
}
