//! Property-based tests for the graph algorithms.
//!
//! Checks Prim's and Dijkstra's results against simple sequential oracles
//! (Kruskal and Bellman-Ford relaxation) and checks that both traversals
//! visit exactly the vertices reachable from the start, across sparse,
//! dense, disconnected and tie-heavy topologies.

mod oracle;
mod properties;
mod strategies;
mod types;
