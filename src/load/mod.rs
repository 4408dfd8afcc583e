//! Bounded-duration concurrent load phase and its progress reporting.
mod config;
mod dispatch;
mod orchestrator;
mod progress;
mod report;


pub use config::LoadTestConfig;
pub use dispatch::DispatchOutcome;
pub use orchestrator::{DEFAULT_PROGRESS_TICK, LoadOrchestrator};
pub use progress::{ProgressTracker, RunState};
pub use report::{FailureCounts, LoadReport};
