use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::error::AppResult;
use crate::http::{RequestExecutor, RequestSpec};
use crate::shutdown::ShutdownSender;

use super::config::LoadTestConfig;
use super::dispatch::{DispatchStats, dispatch_all, spawn_outcome_collector};
use super::progress::{ProgressTracker, spawn_progress_task};
use super::report::LoadReport;

/// Cadence at which the progress activity recomputes the percentage.
pub const DEFAULT_PROGRESS_TICK: Duration = Duration::from_secs(1);

/// Runs a bounded-duration burst of concurrent executions of one request.
///
/// While running, two activities proceed side by side: every iteration is
/// launched at once without pacing, and a progress task publishes the share
/// of the duration budget already spent. [`run`](Self::run) returns when the
/// budget is exhausted, whether or not the launched executions finished.
pub struct LoadOrchestrator<E: ?Sized, B = Value> {
    executor: Arc<E>,
    spec: Arc<RequestSpec<B>>,
    tracker: ProgressTracker,
    tick: Duration,
}

impl<E, B> LoadOrchestrator<E, B>
where
    E: RequestExecutor<B> + ?Sized + 'static,
    B: Send + Sync + 'static,
{
    #[must_use]
    pub fn new(executor: Arc<E>, spec: Arc<RequestSpec<B>>) -> Self {
        Self {
            executor,
            spec,
            tracker: ProgressTracker::new(),
            tick: DEFAULT_PROGRESS_TICK,
        }
    }

    /// Overrides how often progress is recomputed.
    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_millis(1));
        self
    }

    /// Handle for readers that poll progress while [`run`](Self::run) is active.
    #[must_use]
    pub fn tracker(&self) -> ProgressTracker {
        self.tracker.clone()
    }

    /// Drives one load phase to the end of its duration budget.
    ///
    /// With a single iteration nothing runs and an idle report is returned.
    /// Failures of dispatched executions are logged and counted, never
    /// propagated.
    ///
    /// # Errors
    ///
    /// Returns an error only if the progress task panicked.
    pub async fn run(&self, config: &LoadTestConfig) -> AppResult<LoadReport> {
        if !config.is_load_test() {
            debug!("Single iteration requested; skipping load phase.");
            return Ok(LoadReport::idle());
        }

        let total = config.duration();
        let iterations = config.iterations();
        debug!(
            "Starting load phase: {} concurrent requests over {}s.",
            iterations,
            total.as_secs()
        );

        let run_start = Instant::now();
        self.tracker.start();

        let (shutdown_tx, _) = broadcast::channel::<()>(1);
        let progress_handle = spawn_progress_task(
            self.tracker.clone(),
            run_start,
            total,
            self.tick,
            &shutdown_tx,
        );

        let stats = Arc::new(DispatchStats::default());
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        drop(spawn_outcome_collector(outcomes_rx, Arc::clone(&stats)));
        let launched = dispatch_all(&self.executor, &self.spec, iterations, &outcomes_tx);
        drop(outcomes_tx);

        sleep(total.saturating_sub(run_start.elapsed())).await;
        stop_progress(&shutdown_tx);
        progress_handle.await?;

        let report = LoadReport {
            launched,
            succeeded: stats.succeeded(),
            failures: stats.failures(),
            elapsed: run_start.elapsed(),
        };
        debug!(
            "Load phase done after {:?}: {} launched, {} succeeded, {} failed, {} still in flight.",
            report.elapsed,
            report.launched,
            report.succeeded,
            report.failed(),
            report.in_flight()
        );
        Ok(report)
    }
}

fn stop_progress(shutdown_tx: &ShutdownSender) {
    // The progress task may already have stopped on its own final tick.
    drop(shutdown_tx.send(()));
}
