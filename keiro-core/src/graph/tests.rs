//! Unit tests for graph construction and the four algorithms.

use rstest::{fixture, rstest};

use crate::{
    AlgorithmOutput, DuplicateEdgePolicy, GraphBuilder, HeapCapacityPolicy, NO_PARENT, UNREACHABLE,
    error::{GraphError, HeapError},
    result::Algorithm,
};

use super::Graph;

fn graph_with(vertex_count: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let mut graph = Graph::new(vertex_count).expect("vertex count is positive");
    for &(source, target, weight) in edges {
        graph
            .add_edge(source, target, weight)
            .expect("edge endpoints are valid");
    }
    graph
}

#[fixture]
fn path_graph() -> Graph {
    graph_with(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)])
}

#[fixture]
fn prim_graph() -> Graph {
    graph_with(4, &[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)])
}

#[fixture]
fn detour_graph() -> Graph {
    graph_with(3, &[(0, 1, 4), (0, 2, 1), (2, 1, 1)])
}

#[test]
fn add_edge_is_symmetric() {
    let graph = graph_with(3, &[(0, 2, 9)]);
    assert_eq!(graph.edge_weight(0, 2), Some(9));
    assert_eq!(graph.edge_weight(2, 0), Some(9));
    let forward: Vec<_> = graph
        .neighbors(0)
        .expect("vertex 0")
        .map(|e| (e.destination(), e.weight()))
        .collect();
    let backward: Vec<_> = graph
        .neighbors(2)
        .expect("vertex 2")
        .map(|e| (e.destination(), e.weight()))
        .collect();
    assert_eq!(forward, vec![(2, 9)]);
    assert_eq!(backward, vec![(0, 9)]);
    assert_eq!(graph.edge_weight(0, 1), None);
}

#[rstest]
#[case::source_out_of_range(3, 0)]
#[case::target_out_of_range(0, 3)]
#[case::both_out_of_range(7, 9)]
fn add_edge_rejects_out_of_range_vertices(#[case] source: usize, #[case] target: usize) {
    let mut graph = Graph::new(3).expect("vertex count is positive");
    let err = graph
        .add_edge(source, target, 1)
        .expect_err("edge must be rejected");
    assert!(matches!(err, GraphError::InvalidVertex { vertex_count: 3, .. }));
    assert_eq!(graph.edge_count(), 0);
    assert!((0..3).all(|vertex| graph.adjacency(vertex).is_ok_and(|list| list.is_empty())));
}

#[test]
fn edge_weight_is_none_out_of_range() {
    let graph = graph_with(2, &[(0, 1, 3)]);
    assert_eq!(graph.edge_weight(0, 5), None);
    assert_eq!(graph.edge_weight(5, 0), None);
}

#[test]
fn self_loop_appends_two_records() {
    let graph = graph_with(2, &[(1, 1, 6)]);
    assert_eq!(graph.adjacency(1).expect("vertex 1").len(), 2);
    assert_eq!(graph.edge_weight(1, 1), Some(6));
    assert_eq!(graph.edge_count(), 1);
}

#[rstest]
#[case::append(DuplicateEdgePolicy::Append, 2)]
#[case::replace(DuplicateEdgePolicy::Replace, 1)]
fn duplicate_edges_follow_policy(#[case] policy: DuplicateEdgePolicy, #[case] records: usize) {
    let mut graph = GraphBuilder::new(2)
        .with_duplicate_edges(policy)
        .build()
        .expect("builder configuration is valid");
    graph.add_edge(0, 1, 5).expect("valid edge");
    graph.add_edge(1, 0, 2).expect("valid edge");

    assert_eq!(graph.adjacency(0).expect("vertex 0").len(), records);
    assert_eq!(graph.adjacency(1).expect("vertex 1").len(), records);
    assert_eq!(graph.edge_weight(0, 1), Some(2));
    assert_eq!(graph.edge_count(), 1);
    let first = graph.neighbors(0).expect("vertex 0").next();
    assert_eq!(first.map(|e| e.weight()), Some(2));
}

#[rstest]
fn bfs_and_dfs_follow_a_path(path_graph: Graph) {
    assert_eq!(path_graph.bfs(0).expect("bfs").order(), &[0, 1, 2, 3]);
    assert_eq!(path_graph.dfs(0).expect("dfs").order(), &[0, 1, 2, 3]);
}

#[test]
fn bfs_explores_newest_edges_first() {
    let graph = graph_with(4, &[(0, 1, 1), (0, 2, 1), (0, 3, 1)]);
    assert_eq!(graph.bfs(0).expect("bfs").order(), &[0, 3, 2, 1]);
}

#[test]
fn dfs_follows_oldest_edge_first() {
    let graph = graph_with(5, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1)]);
    assert_eq!(graph.dfs(0).expect("dfs").order(), &[0, 1, 3, 2, 4]);
}

#[test]
fn dfs_skips_duplicate_stack_entries() {
    // 0 pushes 1 and 2; 1 then pushes 2 again before either copy surfaces.
    let graph = graph_with(3, &[(0, 1, 1), (0, 2, 1), (1, 2, 1)]);
    let traversal = graph.dfs(0).expect("dfs");
    assert_eq!(traversal.order(), &[0, 1, 2]);
    assert!(traversal.is_complete());
}

#[rstest]
fn bfs_is_idempotent(path_graph: Graph) {
    let first = path_graph.bfs(1).expect("bfs");
    let second = path_graph.bfs(1).expect("bfs");
    assert_eq!(first, second);
    assert_eq!(first.order(), &[1, 2, 0, 3]);
}

#[rstest]
fn prim_finds_minimum_weight(prim_graph: Graph) {
    let tree = prim_graph.prim(0).expect("prim");
    assert_eq!(tree.total_weight(), 4);
    assert_eq!(tree.parents(), &[None, Some(0), Some(1), Some(2)]);
    assert!(tree.is_spanning());
}

#[rstest]
fn prim_tree_is_independent_of_start_weight(prim_graph: Graph) {
    let tree = prim_graph.prim(3).expect("prim");
    assert_eq!(tree.total_weight(), 4);
    assert_eq!(tree.parent(3), None);
}

#[rstest]
fn dijkstra_prefers_cheaper_detour(detour_graph: Graph) {
    let paths = detour_graph.dijkstra(0).expect("dijkstra");
    assert_eq!(paths.distances(), &[Some(0), Some(2), Some(1)]);
    assert_eq!(paths.predecessor(1), Some(2));
    assert_eq!(paths.path_to(1), Some(vec![0, 2, 1]));
}

#[test]
fn dijkstra_accepts_zero_weight_edges() {
    let graph = graph_with(3, &[(0, 1, 0), (1, 2, 0)]);
    let paths = graph.dijkstra(0).expect("dijkstra");
    assert_eq!(paths.distances(), &[Some(0), Some(0), Some(0)]);
}

#[test]
fn dijkstra_sums_weights_without_overflow() {
    let graph = graph_with(3, &[(0, 1, u32::MAX), (1, 2, u32::MAX)]);
    let paths = graph.dijkstra(0).expect("dijkstra");
    assert_eq!(paths.distance(2), Some(2 * u64::from(u32::MAX)));
}

#[test]
fn disconnected_vertices_keep_sentinels() {
    let graph = graph_with(5, &[(0, 1, 2), (3, 4, 1)]);

    let bfs = graph.bfs(0).expect("bfs");
    assert_eq!(bfs.order(), &[0, 1]);
    assert!(!bfs.is_complete());
    assert_eq!(graph.dfs(0).expect("dfs").order(), &[0, 1]);

    let mut buffer = [0_i64; 5];
    let tree = AlgorithmOutput::from(graph.prim(0).expect("prim"));
    assert_eq!(tree.encode_into(&mut buffer), 5);
    assert_eq!(buffer, [NO_PARENT, 0, NO_PARENT, NO_PARENT, NO_PARENT]);

    let paths = AlgorithmOutput::from(graph.dijkstra(0).expect("dijkstra"));
    assert_eq!(paths.encode_into(&mut buffer), 5);
    assert_eq!(buffer, [0, 2, UNREACHABLE, UNREACHABLE, UNREACHABLE]);
}

#[test]
fn single_vertex_graph_runs_every_algorithm() {
    let graph = Graph::new(1).expect("vertex count is positive");
    for algorithm in Algorithm::ALL {
        let output = graph.run(algorithm, 0).expect("start is valid");
        assert_eq!(output.algorithm(), algorithm);
    }
}

#[rstest]
#[case::bfs(Algorithm::Bfs)]
#[case::dfs(Algorithm::Dfs)]
#[case::prim(Algorithm::Prim)]
#[case::dijkstra(Algorithm::Dijkstra)]
fn algorithms_reject_out_of_range_start(#[case] algorithm: Algorithm) {
    let graph = Graph::new(2).expect("vertex count is positive");
    let err = graph.run(algorithm, 2).expect_err("start must be rejected");
    assert_eq!(
        err,
        GraphError::InvalidVertex {
            vertex: 2,
            vertex_count: 2,
        }
    );
}

#[rstest]
#[case::prim(Algorithm::Prim)]
#[case::dijkstra(Algorithm::Dijkstra)]
fn exhausted_heap_surfaces_as_graph_error(#[case] algorithm: Algorithm) {
    let mut graph = GraphBuilder::new(3)
        .with_heap_capacity(HeapCapacityPolicy::Fixed(1))
        .build()
        .expect("builder configuration is valid");
    graph.add_edge(0, 1, 1).expect("valid edge");
    graph.add_edge(0, 2, 1).expect("valid edge");

    let err = graph
        .run(algorithm, 0)
        .expect_err("second push must overflow");
    assert_eq!(
        err,
        GraphError::Heap {
            source: HeapError::CapacityExceeded { capacity: 1 },
        }
    );
}

#[test]
fn quadratic_heap_absorbs_parallel_edges() {
    let mut graph = Graph::new(3).expect("vertex count is positive");
    for weight in 1..=8 {
        graph.add_edge(0, 1, weight).expect("valid edge");
    }
    graph.add_edge(1, 2, 1).expect("valid edge");
    let paths = graph.dijkstra(0).expect("stale entries fit in a 3x3 heap");
    assert_eq!(paths.distance(2), Some(2));
}

#[test]
fn graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph>();
}
