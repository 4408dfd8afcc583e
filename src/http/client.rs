use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// Builds the HTTP client shared by the baseline request and every
/// dispatched execution.
///
/// # Errors
///
/// Returns `BuildClient` when the TLS backend or client cannot be initialised.
pub fn build_client() -> Result<Client, HttpError> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| HttpError::BuildClient { source: err })
}
