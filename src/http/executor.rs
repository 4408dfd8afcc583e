use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::HttpError;

use super::builder::build_request;
use super::client::build_client;
use super::execution::{ExecutionResult, send_request};
use super::spec::RequestSpec;

/// Sends one request described by a [`RequestSpec`].
///
/// Implementations never retry; every call is a single attempt.
#[async_trait]
pub trait RequestExecutor<B: Send + Sync = Value>: Send + Sync {
    /// Executes the request once.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpError`] whose [`kind`](HttpError::kind) tells whether
    /// building, serialization, the transport, or the body read failed.
    async fn execute(&self, spec: &RequestSpec<B>) -> Result<ExecutionResult, HttpError>;
}

/// `reqwest`-backed executor. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// Creates an executor with a freshly built client.
    ///
    /// # Errors
    ///
    /// Returns `BuildClient` when the client cannot be built.
    pub fn new() -> Result<Self, HttpError> {
        Ok(Self::with_client(build_client()?))
    }

    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<B> RequestExecutor<B> for HttpExecutor
where
    B: Serialize + Send + Sync,
{
    async fn execute(&self, spec: &RequestSpec<B>) -> Result<ExecutionResult, HttpError> {
        let request = build_request(&self.client, spec)?;
        send_request(&self.client, request).await
    }
}
