use std::time::Duration;

use crate::args::{CliArgs, DEFAULT_DURATION_SECS, DEFAULT_ITERATIONS, PositiveU64, PositiveUsize};

/// How many requests a load phase launches and how long it lasts.
///
/// Both values are positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTestConfig {
    iterations: PositiveUsize,
    duration_secs: PositiveU64,
}

impl LoadTestConfig {
    #[must_use]
    pub const fn new(iterations: PositiveUsize, duration_secs: PositiveU64) -> Self {
        Self {
            iterations,
            duration_secs,
        }
    }

    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations.get()
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs.get())
    }

    /// A single iteration is just the baseline request; no load phase runs.
    #[must_use]
    pub const fn is_load_test(&self) -> bool {
        self.iterations.get() > 1
    }
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self::new(
            PositiveUsize::from(DEFAULT_ITERATIONS),
            PositiveU64::from(DEFAULT_DURATION_SECS),
        )
    }
}

impl From<&CliArgs> for LoadTestConfig {
    fn from(args: &CliArgs) -> Self {
        Self::new(args.iterations, args.duration)
    }
}
