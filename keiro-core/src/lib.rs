//! Keiro graph algorithm engine.
//!
//! Provides an undirected weighted [`Graph`] with breadth-first search,
//! depth-first search, Prim's minimum spanning tree and Dijkstra's shortest
//! paths, built on hand-written linked containers, per-vertex adjacency
//! chains and a lazy-deletion [`PriorityHeap`]. [`GraphSession`] wraps a
//! graph behind the integer-indexed boundary used by front ends.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod builder;
mod collections;
mod error;
mod graph;
mod heap;
mod result;
mod session;
#[cfg(test)]
mod test_utils;

/// Edge weight stored in adjacency chains and the adjacency matrix.
pub type Weight = u32;

/// Weight used when an edge is supplied without one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Largest vertex count a graph accepts.
///
/// The adjacency matrix holds `MAX_VERTICES²` cells, so larger graphs are
/// rejected before anything is allocated.
pub const MAX_VERTICES: usize = 1 << 13;

/// Accumulated path length computed by Dijkstra's algorithm.
pub type Distance = u64;

pub use crate::{
    adjacency::{AdjacencyList, EdgeRecord, Edges},
    builder::{DuplicateEdgePolicy, GraphBuilder, GraphConfig, HeapCapacityPolicy},
    collections::{LinkedQueue, LinkedStack, QueueIter, StackIter},
    error::{
        GraphError, GraphErrorCode, HeapError, HeapErrorCode, Result, SessionError,
        SessionErrorCode,
    },
    graph::Graph,
    heap::{HeapCapacity, HeapEntry, PriorityHeap},
    result::{
        Algorithm, AlgorithmOutput, NO_PARENT, ShortestPaths, SpanningTree, Traversal,
        UNREACHABLE, UnknownAlgorithm,
    },
    session::GraphSession,
};
