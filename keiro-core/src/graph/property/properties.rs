//! Property runners shared by the proptest and rstest suites.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::oracle::{bellman_ford, kruskal_component, reachable};
use super::types::GraphFixture;

fn describe(fixture: &GraphFixture) -> String {
    format!(
        "topology={:?}, policy={:?}, vertices={}, edges={}, start={}",
        fixture.topology,
        fixture.policy,
        fixture.vertex_count,
        fixture.edges.len(),
        fixture.start,
    )
}

fn fail(message: impl std::fmt::Display, fixture: &GraphFixture) -> TestCaseError {
    TestCaseError::fail(format!("{message} ({})", describe(fixture)))
}

/// Prim's tree spans the start component with the oracle's minimum weight
/// and uses only edges present in the graph.
pub(super) fn run_prim_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let tree = graph
        .prim(fixture.start)
        .map_err(|err| fail(format!("prim failed: {err}"), fixture))?;
    let edges = fixture.effective_edges();
    let (oracle_weight, oracle_edges) =
        kruskal_component(fixture.vertex_count, &edges, fixture.start);

    let total = tree.total_weight();
    if total != oracle_weight {
        let message = format!("total weight mismatch: prim={total}, kruskal={oracle_weight}");
        return Err(fail(message, fixture));
    }
    let spanned = tree.spanned_count();
    if spanned != oracle_edges + 1 {
        let message = format!("spanned {spanned} vertices, kruskal joined {oracle_edges} edges");
        return Err(fail(message, fixture));
    }
    if tree.parent(fixture.start).is_some() {
        return Err(fail("start vertex has a parent", fixture));
    }
    let foreign = tree
        .edges()
        .find(|&(parent, child, weight)| !fixture.has_edge(parent, child, weight));
    if let Some((parent, child, weight)) = foreign {
        let message = format!("tree edge {parent}-{child} ({weight}) is not in the graph");
        return Err(fail(message, fixture));
    }
    Ok(())
}

/// Dijkstra's distances equal Bellman-Ford's and each predecessor lies on
/// a tight edge.
pub(super) fn run_dijkstra_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let paths = graph
        .dijkstra(fixture.start)
        .map_err(|err| fail(format!("dijkstra failed: {err}"), fixture))?;
    let edges = fixture.effective_edges();
    let expected = bellman_ford(fixture.vertex_count, &edges, fixture.start);

    let actual = paths.distances();
    if actual != expected.as_slice() {
        let message = format!("distance mismatch: dijkstra={actual:?}, oracle={expected:?}");
        return Err(fail(message, fixture));
    }
    for vertex in (0..fixture.vertex_count).filter(|&v| v != fixture.start) {
        let (Some(distance), Some(previous)) = (paths.distance(vertex), paths.predecessor(vertex))
        else {
            continue;
        };
        let tight = paths.distance(previous).is_some_and(|base| {
            edges.iter().any(|&(a, b, weight)| {
                ((a == previous && b == vertex) || (a == vertex && b == previous))
                    && base + u64::from(weight) == distance
            })
        });
        if !tight {
            let message = format!("predecessor {previous} of {vertex} is not on a shortest path");
            return Err(fail(message, fixture));
        }
    }
    Ok(())
}

/// BFS and DFS visit every reachable vertex exactly once, starting at the
/// start vertex, and BFS visits vertices in non-decreasing hop order.
pub(super) fn run_traversal_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let edges = fixture.effective_edges();
    let expected = reachable(fixture.vertex_count, &edges, fixture.start);
    let expected_count = expected.iter().filter(|&&seen| seen).count();

    for result in [graph.bfs(fixture.start), graph.dfs(fixture.start)] {
        let traversal = result.map_err(|err| fail(format!("traversal failed: {err}"), fixture))?;
        let algorithm = traversal.algorithm();
        let order = traversal.order();
        if order.first() != Some(&fixture.start) {
            return Err(fail(format!("{algorithm} did not begin at the start"), fixture));
        }
        let mut seen = vec![false; fixture.vertex_count];
        for &vertex in order {
            if seen[vertex] || !expected[vertex] {
                let message = format!("{algorithm} visited {vertex} unexpectedly");
                return Err(fail(message, fixture));
            }
            seen[vertex] = true;
        }
        let visited = order.len();
        if visited != expected_count {
            let message = format!("{algorithm} visited {visited} of {expected_count} vertices");
            return Err(fail(message, fixture));
        }
    }

    let unit: Vec<_> = edges.iter().map(|&(a, b, _)| (a, b, 1)).collect();
    let hops = bellman_ford(fixture.vertex_count, &unit, fixture.start);
    let bfs = graph
        .bfs(fixture.start)
        .map_err(|err| fail(format!("bfs failed: {err}"), fixture))?;
    let levels: Vec<_> = bfs.order().iter().map(|&vertex| hops[vertex]).collect();
    if levels.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(fail(format!("bfs levels are not monotone: {levels:?}"), fixture));
    }
    Ok(())
}
