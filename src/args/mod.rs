//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::CliArgs;
pub use types::{PositiveU64, PositiveUsize};

pub(crate) use defaults::{DEFAULT_DURATION_SECS, DEFAULT_ITERATIONS, DEFAULT_USER_AGENT};
