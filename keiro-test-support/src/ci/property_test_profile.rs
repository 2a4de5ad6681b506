//! Property-test run profile read from environment overrides.
//!
//! Every proptest suite in the workspace sizes itself through
//! [`ProptestRunProfile::load`], so CI can raise case counts or enable
//! forking without touching the suites.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const KEIRO_PBT_FORK_ENV_KEY: &str = "KEIRO_PBT_FORK";

/// Reason an environment override was ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The value was not an unsigned integer.
    #[error("expected a positive integer, got {raw:?}")]
    NotANumber {
        /// The raw override.
        raw: String,
    },
    /// Zero cases would skip the property entirely.
    #[error("case count must be positive")]
    ZeroCases,
    /// The value was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got {raw:?}")]
    NotABool {
        /// The raw override.
        raw: String,
    },
}

/// Case count and fork flag for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the suite's defaults when a
    /// variable is unset or malformed.
    ///
    /// # Examples
    /// ```
    /// use keiro_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(KEIRO_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, raw = %raw, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}
