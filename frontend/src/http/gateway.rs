//! HTTP gateway for the portal API.
//!
//! One gateway is built at startup from the application [`Config`] and a
//! [`TokenSource`]; clones share the same underlying client. Every request
//! goes through [`augment_request`] before dispatch, so the anti-forgery
//! contract holds without any per-call-site bookkeeping.

use crate::config::Config;
use crate::errors::ClientResult;
use crate::http::options::{RequestBody, RequestOptions, augment_request};
use crate::session::TokenSource;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Dispatches requests to the portal, applying anti-forgery augmentation.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGateway")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpGateway {
    pub fn new(config: &Config, tokens: Arc<dyn TokenSource>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.server_base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Resolves a portal path against the configured base URL. Absolute
    /// URLs are passed through.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Dispatches one request after augmentation.
    ///
    /// Transport failures surface as errors; non-2xx responses are handed
    /// back as-is, response handling belongs to the caller.
    pub async fn send(&self, path: &str, options: RequestOptions) -> ClientResult<Response> {
        let options = augment_request(options, self.tokens.as_ref());
        let url = self.build_url(path);
        let method = options.effective_method();

        debug!("{} {}", method, url);

        let mut request = self.client.request(method, url.as_str()).headers(options.headers);
        request = match options.body {
            Some(RequestBody::Text(text)) => request.body(text),
            Some(RequestBody::Binary(bytes)) => request.body(bytes),
            None => request,
        };

        Ok(request.send().await?)
    }

    /// Dispatches a request and reports a discriminated outcome instead of
    /// raising.
    ///
    /// JSON is the assumed content type unless the caller set one. The
    /// response body is parsed first; a non-2xx status then becomes a
    /// failure carrying the server's `error` field, or a generic
    /// `HTTP <status>: <reason>` line when the server sent none. Transport
    /// and decode failures become failures too.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        mut options: RequestOptions,
    ) -> FetchOutcome<T> {
        if !options.headers.contains_key(CONTENT_TYPE) {
            options
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let response = match self.send(path, options).await {
            Ok(response) => response,
            Err(err) => {
                error!("Request to {} failed: {}", path, err);
                return FetchOutcome::failure(err.to_string());
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                error!("Failed to decode response from {}: {}", path, err);
                return FetchOutcome::failure(err.to_string());
            }
        };

        if !status.is_success() {
            return FetchOutcome::failure(status_failure_message(status, &body));
        }

        match serde_json::from_value(body) {
            Ok(data) => FetchOutcome::success(data),
            Err(err) => {
                error!("Unexpected response shape from {}: {}", path, err);
                FetchOutcome::failure(err.to_string())
            }
        }
    }
}

/// Outcome of a JSON request: exactly one of `data` and `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> FetchOutcome<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

fn status_failure_message(status: StatusCode, body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Error")
            )
        })
}
