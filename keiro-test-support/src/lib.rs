//! Shared test utilities used across keiro crates.
//!
//! [`recording`] captures spans and events so tests can assert on
//! instrumentation; [`ci`] reads the environment overrides that tune
//! property suites.

pub mod ci;
pub mod recording;
