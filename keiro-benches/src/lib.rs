//! Benchmark support crate for keiro.
//!
//! Provides seeded synthetic graphs and parameter types shared by the
//! Criterion benchmarks for the traversal, spanning-tree and
//! shortest-path runs and for the priority heap.

pub mod error;
pub mod params;
pub mod synthetic;
