use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::http::RequestSpec;

/// On-disk shape of a request configuration file.
///
/// Headers live under `config` for compatibility with existing files;
/// `headers` is accepted as an alias.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RequestFile {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "config", alias = "headers")]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl TryFrom<RequestFile> for RequestSpec {
    type Error = ConfigError;

    fn try_from(file: RequestFile) -> Result<Self, Self::Error> {
        let method = file
            .method
            .filter(|method| !method.trim().is_empty())
            .ok_or(ConfigError::MissingMethod)?;
        let url = file
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let spec = RequestSpec::new(method, url)?.with_headers(file.headers);
        Ok(match file.body {
            Some(Value::Null) | None => spec,
            Some(body @ Value::Object(_)) => spec.with_body(body),
            Some(other) => {
                return Err(ConfigError::BodyNotObject {
                    found: json_type_name(&other),
                });
            }
        })
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
