//! Search engine configuration.

/// Configuration for a timetable search.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Wall-clock budget in milliseconds.
    pub time_limit_ms: u64,
}

impl SolverConfig {
    /// Creates a configuration with the default 60 second budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
        }
    }
}
