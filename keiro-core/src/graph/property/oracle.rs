//! Sequential reference implementations used as property oracles.

use crate::{Distance, Weight};

/// Marks every vertex reachable from `start` by repeated edge scans.
pub(super) fn reachable(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
    start: usize,
) -> Vec<bool> {
    let mut seen = vec![false; vertex_count];
    seen[start] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for &(source, target, _) in edges {
            if seen[source] != seen[target] {
                seen[source] = true;
                seen[target] = true;
                changed = true;
            }
        }
    }
    seen
}

/// Bellman-Ford relaxation over the undirected edge list.
pub(super) fn bellman_ford(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
    start: usize,
) -> Vec<Option<Distance>> {
    let mut distances: Vec<Option<Distance>> = vec![None; vertex_count];
    distances[start] = Some(0);
    for _ in 1..vertex_count.max(2) {
        let mut changed = false;
        for &(a, b, weight) in edges {
            for (from, to) in [(a, b), (b, a)] {
                let Some(base) = distances[from] else { continue };
                let candidate = base + Distance::from(weight);
                if distances[to].is_none_or(|best| candidate < best) {
                    distances[to] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    distances
}

/// Kruskal's minimum spanning forest restricted to the component containing
/// `start`. Returns the tree's total weight and edge count.
pub(super) fn kruskal_component(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
    start: usize,
) -> (Distance, usize) {
    let in_component = reachable(vertex_count, edges, start);
    let mut sorted: Vec<_> = edges
        .iter()
        .copied()
        .filter(|&(source, target, _)| source != target && in_component[source])
        .collect();
    sorted.sort_unstable_by_key(|&(_, _, weight)| weight);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total: Distance = 0;
    let mut count = 0;
    for (source, target, weight) in sorted {
        let a = find_root(&mut parent, source);
        let b = find_root(&mut parent, target);
        if a != b {
            parent[a] = b;
            total += Distance::from(weight);
            count += 1;
        }
    }
    (total, count)
}

fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
