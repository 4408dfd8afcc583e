use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{FailureKind, HttpError};
use crate::http::{ExecutionResult, RequestExecutor, RequestSpec};

use super::report::FailureCounts;

/// Result of one dispatched execution, tagged with its launch index.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub iteration: usize,
    pub result: Result<ExecutionResult, HttpError>,
}

#[derive(Debug, Default)]
pub(super) struct DispatchStats {
    succeeded: AtomicUsize,
    build: AtomicUsize,
    serialization: AtomicUsize,
    network: AtomicUsize,
    read: AtomicUsize,
}

impl DispatchStats {
    fn record(&self, outcome: &DispatchOutcome) {
        let counter = match &outcome.result {
            Ok(_) => &self.succeeded,
            Err(err) => match err.kind() {
                FailureKind::Build => &self.build,
                FailureKind::Serialization => &self.serialization,
                FailureKind::Network => &self.network,
                FailureKind::Read => &self.read,
            },
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub(super) fn failures(&self) -> FailureCounts {
        FailureCounts {
            build: self.build.load(Ordering::Relaxed),
            serialization: self.serialization.load(Ordering::Relaxed),
            network: self.network.load(Ordering::Relaxed),
            read: self.read.load(Ordering::Relaxed),
        }
    }
}

/// Launches `iterations` independent executions of `spec` and returns
/// without waiting for any of them. Each one reports through `outcomes_tx`.
pub(super) fn dispatch_all<E, B>(
    executor: &Arc<E>,
    spec: &Arc<RequestSpec<B>>,
    iterations: usize,
    outcomes_tx: &mpsc::UnboundedSender<DispatchOutcome>,
) -> usize
where
    E: RequestExecutor<B> + ?Sized + 'static,
    B: Send + Sync + 'static,
{
    for iteration in 0..iterations {
        let executor = Arc::clone(executor);
        let spec = Arc::clone(spec);
        let outcomes_tx = outcomes_tx.clone();

        drop(tokio::spawn(async move {
            let result = executor.execute(&spec).await;
            // Fails only once the collector has stopped; the outcome is then lost.
            drop(outcomes_tx.send(DispatchOutcome { iteration, result }));
        }));
    }
    debug!("Dispatched {} concurrent executions.", iterations);
    iterations
}

/// Drains dispatch outcomes, logging each one and updating `stats`.
pub(super) fn spawn_outcome_collector(
    mut outcomes_rx: mpsc::UnboundedReceiver<DispatchOutcome>,
    stats: Arc<DispatchStats>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(outcome) = outcomes_rx.recv().await {
            stats.record(&outcome);
            match &outcome.result {
                Ok(result) => debug!(
                    "Iteration {} finished with status {} in {:?}.",
                    outcome.iteration, result.status, result.latency
                ),
                Err(err) => warn!(
                    "Iteration {} failed ({}{}): {}",
                    outcome.iteration,
                    err.kind().as_str(),
                    if err.is_timeout() { ", timed out" } else { "" },
                    err
                ),
            }
        }
    })
}
