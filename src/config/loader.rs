use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};
use crate::http::RequestSpec;

use super::types::RequestFile;

/// Loads and validates the request configuration at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, or
/// lacks a method or URL.
pub fn load_request_spec(path: &Path) -> AppResult<RequestSpec> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    parse_request_spec(path, &content)
}

/// Parses configuration text that was read from `path`.
///
/// # Errors
///
/// Returns an error when the text is not valid JSON or lacks a method or URL.
pub fn parse_request_spec(path: &Path, content: &str) -> AppResult<RequestSpec> {
    let file: RequestFile = serde_json::from_str(content).map_err(|err| {
        AppError::config(ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let spec = RequestSpec::try_from(file)?;
    tracing::debug!(
        "Loaded request config from {}: {} {}",
        path.display(),
        spec.method(),
        spec.url()
    );
    Ok(spec)
}
