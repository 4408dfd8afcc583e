use std::time::Duration;

/// Failed dispatched executions, split by failure kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureCounts {
    pub build: usize,
    pub serialization: usize,
    pub network: usize,
    pub read: usize,
}

impl FailureCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.build
            .saturating_add(self.serialization)
            .saturating_add(self.network)
            .saturating_add(self.read)
    }
}

/// Snapshot of a load phase taken when its duration budget ran out.
///
/// Executions still in flight at that moment are counted in `launched` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub launched: usize,
    pub succeeded: usize,
    pub failures: FailureCounts,
    pub elapsed: Duration,
}

impl LoadReport {
    /// Report for a run where no load phase took place.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            launched: 0,
            succeeded: 0,
            failures: FailureCounts {
                build: 0,
                serialization: 0,
                network: 0,
                read: 0,
            },
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failures.total()
    }

    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.launched
            .saturating_sub(self.succeeded)
            .saturating_sub(self.failed())
    }

    #[must_use]
    pub const fn ran(&self) -> bool {
        self.launched > 0
    }
}
