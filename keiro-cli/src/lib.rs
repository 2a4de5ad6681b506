//! Support library for the `keiro` binary.
//!
//! Exposes argument parsing, edge-file loading and logging setup so tests
//! can drive the command pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
