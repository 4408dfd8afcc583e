use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval};

use crate::shutdown::ShutdownSender;

const COMPLETE: u8 = 100;

/// Lifecycle of a load phase as seen by progress readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Done,
}

impl RunState {
    const fn as_u8(self) -> u8 {
        match self {
            RunState::Idle => 0,
            RunState::Running => 1,
            RunState::Done => 2,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => RunState::Idle,
            1 => RunState::Running,
            _ => RunState::Done,
        }
    }
}

#[derive(Debug)]
struct ProgressCell {
    percent: AtomicU8,
    state: AtomicU8,
}

/// Shared completion percentage of the running load phase.
///
/// One writer (the progress activity) and any number of readers. Every read
/// returns a value that some `set` committed in full. Writes overwrite
/// unconditionally; the single writer only ever moves forward.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    cell: Arc<ProgressCell>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: Arc::new(ProgressCell {
                percent: AtomicU8::new(0),
                state: AtomicU8::new(RunState::Idle.as_u8()),
            }),
        }
    }

    /// Stores `percent`, clamped to 100.
    pub fn set(&self, percent: u8) {
        self.cell
            .percent
            .store(percent.min(COMPLETE), Ordering::Release);
    }

    #[must_use]
    pub fn get(&self) -> u8 {
        self.cell.percent.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        RunState::from_u8(self.cell.state.load(Ordering::Acquire))
    }

    pub(super) fn start(&self) {
        self.set(0);
        self.cell
            .state
            .store(RunState::Running.as_u8(), Ordering::Release);
    }

    pub(super) fn finish(&self) {
        self.set(COMPLETE);
        self.cell
            .state
            .store(RunState::Done.as_u8(), Ordering::Release);
    }
}

/// Share of `total` covered by `elapsed`, as a whole percentage in 0..=100.
pub(super) fn percent_elapsed(elapsed: Duration, total: Duration) -> u8 {
    let percent = elapsed
        .as_millis()
        .saturating_mul(u128::from(COMPLETE))
        .checked_div(total.as_millis())
        .unwrap_or(u128::from(COMPLETE))
        .min(u128::from(COMPLETE));
    u8::try_from(percent).unwrap_or(COMPLETE)
}

/// Recomputes progress on every tick until `total` has elapsed or shutdown
/// is signalled, then commits 100.
pub(super) fn spawn_progress_task(
    tracker: ProgressTracker,
    run_start: Instant,
    total: Duration,
    tick: Duration,
    shutdown_tx: &ShutdownSender,
) -> JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();

    tokio::spawn(async move {
        let mut ticker = interval(tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = ticker.tick() => {
                    let elapsed = run_start.elapsed();
                    tracker.set(percent_elapsed(elapsed, total));
                    if elapsed >= total {
                        break;
                    }
                }
            }
        }

        tracker.finish();
    })
}
