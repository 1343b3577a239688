//! Engine configuration.
//!
//! All fields have defaults, so a configuration file only needs the keys it
//! changes:
//!
//! ```toml
//! max_permutations = 5040
//! log_path = "rounds.log"
//! ```

use std::path::PathBuf;

/// Default bound on orderings tried per addition vector (`8!`).
pub const DEFAULT_MAX_PERMUTATIONS: usize = 40_320;

/// Default round log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "temp.dat";

/// Limits and destinations for a decomposition run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EngineConfig {
    /// Largest `n!` the engine will enumerate for one addition vector.
    /// Row capacities beyond it fail with `ComputationTooLarge`.
    pub max_permutations: usize,
    /// File the round log is appended to when logging is requested.
    pub log_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_permutations: DEFAULT_MAX_PERMUTATIONS,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl EngineConfig {
    /// Replace the permutation bound.
    #[must_use]
    pub fn with_max_permutations(mut self, limit: usize) -> Self {
        self.max_permutations = limit;
        self
    }

    /// Replace the round log location.
    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }
}
