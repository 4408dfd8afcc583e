use thiserror::Error;

/// Coarse classification of a failed request execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Build,
    Serialization,
    Network,
    Read,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureKind::Build => "build",
            FailureKind::Serialization => "serialization",
            FailureKind::Network => "network",
            FailureKind::Read => "read",
        }
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid HTTP method '{method}': {source}")]
    InvalidMethod {
        method: String,
        #[source]
        source: http::method::InvalidMethod,
    },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}' in '{url}'. Use http or https.")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("Invalid header name '{name}': {source}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: reqwest::header::InvalidHeaderName,
    },
    #[error("Invalid header value for '{name}': {source}")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to serialize request body: {source}")]
    SerializeBody {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to send request: {source}")]
    SendFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body: {source}")]
    ReadBody {
        #[source]
        source: reqwest::Error,
    },
}

impl HttpError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            HttpError::BuildClient { .. }
            | HttpError::InvalidMethod { .. }
            | HttpError::InvalidUrl { .. }
            | HttpError::UnsupportedScheme { .. }
            | HttpError::InvalidHeaderName { .. }
            | HttpError::InvalidHeaderValue { .. }
            | HttpError::BuildRequestFailed { .. } => FailureKind::Build,
            HttpError::SerializeBody { .. } => FailureKind::Serialization,
            HttpError::SendFailed { .. } => FailureKind::Network,
            HttpError::ReadBody { .. } => FailureKind::Read,
        }
    }

    /// True when the transport gave up waiting rather than failing outright.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            HttpError::SendFailed { source } | HttpError::ReadBody { source } => {
                source.is_timeout()
            }
            HttpError::BuildClient { .. }
            | HttpError::InvalidMethod { .. }
            | HttpError::InvalidUrl { .. }
            | HttpError::UnsupportedScheme { .. }
            | HttpError::InvalidHeaderName { .. }
            | HttpError::InvalidHeaderValue { .. }
            | HttpError::BuildRequestFailed { .. }
            | HttpError::SerializeBody { .. } => false,
        }
    }
}
