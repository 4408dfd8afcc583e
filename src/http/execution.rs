use std::borrow::Cow;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, Request};
use tokio::time::Instant;

use crate::error::HttpError;

/// Outcome of one successful request execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status: u16,
    /// Wall-clock time from send until the body was fully read.
    pub latency: Duration,
    pub body: Vec<u8>,
    /// Length announced by the server, when it sent one.
    pub content_length: Option<u64>,
}

impl ExecutionResult {
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

pub(super) async fn send_request(
    client: &Client,
    request: Request,
) -> Result<ExecutionResult, HttpError> {
    let start = Instant::now();
    let response = client
        .execute(request)
        .await
        .map_err(|err| HttpError::SendFailed { source: err })?;
    let status = response.status().as_u16();
    let content_length = response.content_length();
    let body = read_response_body(response)
        .await
        .map_err(|err| HttpError::ReadBody { source: err })?;

    Ok(ExecutionResult {
        status,
        latency: start.elapsed(),
        body,
        content_length,
    })
}

async fn read_response_body(response: reqwest::Response) -> Result<Vec<u8>, reqwest::Error> {
    let capacity = response
        .content_length()
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or(0);
    let mut body = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        body.extend_from_slice(&chunk?);
    }
    Ok(body)
}
