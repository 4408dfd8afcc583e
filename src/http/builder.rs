use std::collections::BTreeMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request, Url};
use serde::Serialize;

use crate::error::HttpError;

use super::spec::RequestSpec;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Turns a spec into a ready-to-send request.
///
/// Every validation happens here, so a failure never reaches the network.
pub(super) fn build_request<B>(client: &Client, spec: &RequestSpec<B>) -> Result<Request, HttpError>
where
    B: Serialize,
{
    let method =
        Method::from_bytes(spec.method().as_bytes()).map_err(|err| HttpError::InvalidMethod {
            method: spec.method().to_owned(),
            source: err,
        })?;
    let url = parse_target_url(spec.url())?;
    let headers = build_header_map(spec.headers())?;
    let has_content_type = headers.contains_key(CONTENT_TYPE);

    let mut builder = client.request(method, url).headers(headers);
    if let Some(body) = spec.body() {
        let payload =
            serde_json::to_vec(body).map_err(|err| HttpError::SerializeBody { source: err })?;
        if !has_content_type {
            builder = builder.header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        builder = builder.body(payload);
    }

    builder
        .build()
        .map_err(|err| HttpError::BuildRequestFailed { source: err })
}

fn parse_target_url(value: &str) -> Result<Url, HttpError> {
    let url = Url::parse(value).map_err(|err| HttpError::InvalidUrl {
        url: value.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HttpError::UnsupportedScheme {
            url: value.to_owned(),
            scheme: other.to_owned(),
        }),
    }
}

fn build_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, HttpError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name =
            HeaderName::from_bytes(key.as_bytes()).map_err(|err| HttpError::InvalidHeaderName {
                name: key.clone(),
                source: err,
            })?;
        let val = HeaderValue::from_str(value).map_err(|err| HttpError::InvalidHeaderValue {
            name: key.clone(),
            source: err,
        })?;
        map.insert(name, val);
    }
    Ok(map)
}
