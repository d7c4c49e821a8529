//! Counters collected while a search runs.

use std::time::Duration;

/// Statistics of one exhaustive search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations visited, feasible or not.
    pub configurations: u64,

    /// Configurations that passed validation.
    pub valid_configurations: u64,

    /// Times the incumbent was replaced (including the first install).
    pub improvements: u64,

    /// Wall-clock time spent enumerating.
    pub elapsed: Duration,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} configurations ({} valid, {} improvements) in {:.3}s",
            self.configurations,
            self.valid_configurations,
            self.improvements,
            self.elapsed.as_secs_f64()
        )
    }
}
