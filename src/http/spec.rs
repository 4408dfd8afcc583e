use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ConfigError;

/// Immutable description of the HTTP call to repeat.
///
/// The body type defaults to a JSON [`Value`], which is what the config
/// loader produces; any `Serialize` type can be used instead.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec<B = Value> {
    method: String,
    url: String,
    headers: BTreeMap<String, String>,
    body: Option<B>,
}

impl<B> RequestSpec<B> {
    /// Creates a spec with no headers and no body.
    ///
    /// # Errors
    ///
    /// Returns `MissingMethod` or `MissingUrl` when either value is blank.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Result<Self, ConfigError> {
        let method = method.into().trim().to_ascii_uppercase();
        if method.is_empty() {
            return Err(ConfigError::MissingMethod);
        }
        let url = url.into().trim().to_owned();
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        Ok(Self {
            method,
            url,
            headers: BTreeMap::new(),
            body: None,
        })
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }
}
