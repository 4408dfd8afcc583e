//! Run flow and terminal rendering.
mod progress;
mod runner;
mod summary;

pub use runner::run_local;
