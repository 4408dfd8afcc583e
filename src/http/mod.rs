//! HTTP request description and execution.
mod builder;
mod client;
mod execution;
mod executor;
mod spec;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::build_client;
pub use execution::ExecutionResult;
pub use executor::{HttpExecutor, RequestExecutor};
pub use spec::RequestSpec;
