//! Seeded graph generators for the property suites.
//!
//! Proptest samples a topology, a duplicate-edge policy and a seed; the
//! graph itself is drawn from a `SmallRng` so shrinking stays cheap and
//! rstest cases can replay a fixture from a fixed seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{DuplicateEdgePolicy, Weight};

use super::types::{GraphFixture, Topology};

const MAX_VERTICES: usize = 40;
const DENSE_MAX_VERTICES: usize = 20;
const MAX_WEIGHT: Weight = 100;

pub(super) fn topology_strategy() -> impl Strategy<Value = Topology> {
    prop_oneof![
        Just(Topology::Sparse),
        Just(Topology::Dense),
        Just(Topology::Disconnected),
        Just(Topology::ManyIdentical),
    ]
}

pub(super) fn policy_strategy() -> impl Strategy<Value = DuplicateEdgePolicy> {
    prop_oneof![Just(DuplicateEdgePolicy::Append), Just(DuplicateEdgePolicy::Replace)]
}

/// Generates fixtures across every topology and both duplicate policies.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (topology_strategy(), policy_strategy(), any::<u64>()).prop_map(|(topology, policy, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, policy, &mut rng)
    })
}

/// Generates a fixture for an explicit topology and policy.
pub(super) fn generate_fixture(
    topology: Topology,
    policy: DuplicateEdgePolicy,
    rng: &mut SmallRng,
) -> GraphFixture {
    let (vertex_count, edges) = match topology {
        Topology::Sparse => generate_sparse(rng),
        Topology::Dense => generate_dense(rng),
        Topology::Disconnected => generate_disconnected(rng),
        Topology::ManyIdentical => generate_identical(rng),
    };
    let start = rng.gen_range(0..vertex_count);
    GraphFixture {
        vertex_count,
        start,
        edges,
        policy,
        topology,
    }
}

fn random_weight(rng: &mut SmallRng) -> Weight {
    rng.gen_range(0..=MAX_WEIGHT)
}

/// Connects `vertices` with a random tree: each vertex after the first
/// attaches to an earlier one.
fn random_tree(
    rng: &mut SmallRng,
    vertices: &[usize],
    weight: &mut impl FnMut(&mut SmallRng) -> Weight,
) -> Vec<(usize, usize, Weight)> {
    (1..vertices.len())
        .map(|index| {
            let parent = vertices[rng.gen_range(0..index)];
            (parent, vertices[index], weight(rng))
        })
        .collect()
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, Weight)>) {
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let mut edges = random_tree(rng, &vertices, &mut random_weight);
    let extra = rng.gen_range(0..=vertex_count / 2);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        edges.push((source, target, random_weight(rng)));
    }
    (vertex_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, Weight)>) {
    let vertex_count = rng.gen_range(2..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.6..=0.95);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((source, target, random_weight(rng)));
            }
        }
    }
    (vertex_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, Weight)>) {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let components = rng.gen_range(2..=vertex_count.min(4));
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); components];
    for vertex in 0..vertex_count {
        groups[rng.gen_range(0..components)].push(vertex);
    }
    let mut edges = Vec::new();
    for group in groups.iter().filter(|group| !group.is_empty()) {
        edges.extend(random_tree(rng, group, &mut random_weight));
    }
    (vertex_count, edges)
}

fn generate_identical(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, Weight)>) {
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let mut two_values = |rng: &mut SmallRng| -> Weight { if rng.gen_bool(0.5) { 1 } else { 2 } };
    let mut edges = random_tree(rng, &vertices, &mut two_values);
    for _ in 0..vertex_count {
        let source = rng.gen_range(0..vertex_count);
        let target = if rng.gen_bool(0.2) {
            source
        } else {
            rng.gen_range(0..vertex_count)
        };
        edges.push((source, target, two_values(rng)));
    }
    (vertex_count, edges)
}
