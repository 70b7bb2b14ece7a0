//! Outbound request options and the anti-forgery augmentation step.
//!
//! Every request the gateway dispatches is described by a [`RequestOptions`]
//! value. [`augment_request`] applies the portal's anti-forgery contract to
//! it: mutating requests gain the `X-CSRFToken` header when a token can be
//! resolved, and plain text bodies are stamped `application/json`. GET
//! requests pass through untouched.

use crate::session::TokenSource;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// Header carrying the anti-forgery token, spelled `X-CSRFToken` on the
/// wire. Stored lowercase because header names are case-insensitive.
pub const CSRF_HEADER: &str = "x-csrftoken";

/// Body of an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Plain textual payload, typically pre-serialized JSON.
    Text(String),
    /// Raw bytes (file uploads and the like); never touched by augmentation.
    Binary(Vec<u8>),
}

/// What a caller hands the gateway for one request. A missing method means
/// GET.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body_text(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }

    pub fn body_binary(mut self, body: Vec<u8>) -> Self {
        self.body = Some(RequestBody::Binary(body));
        self
    }

    /// Method the request will be dispatched with.
    pub fn effective_method(&self) -> Method {
        self.method.clone().unwrap_or(Method::GET)
    }
}

/// Applies the anti-forgery contract to one request.
///
/// GET requests (including requests with no explicit method) are returned
/// unchanged. For everything else the resolved token is inserted as
/// `X-CSRFToken`, replacing any caller-supplied value under that name but
/// leaving all other headers alone, and a [`RequestBody::Text`] body forces
/// `Content-Type: application/json`. A request with no resolvable token is
/// dispatched without the header.
pub fn augment_request(mut options: RequestOptions, tokens: &dyn TokenSource) -> RequestOptions {
    // Method names compare case-insensitively.
    if options.effective_method().as_str().eq_ignore_ascii_case("GET") {
        return options;
    }

    if let Some(token) = tokens.csrf_token() {
        match HeaderValue::from_str(token.as_str()) {
            Ok(value) => {
                options.headers.insert(HeaderName::from_static(CSRF_HEADER), value);
            }
            Err(_) => {
                warn!("CSRF token is not a valid header value, sending request without it");
            }
        }
    }

    if matches!(options.body, Some(RequestBody::Text(_))) {
        options
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CsrfToken;

    struct FixedTokens(Option<&'static str>);

    impl TokenSource for FixedTokens {
        fn csrf_token(&self) -> Option<CsrfToken> {
            self.0.map(CsrfToken::new)
        }
    }

    #[test]
    fn get_requests_pass_through_untouched() {
        let options = RequestOptions::new()
            .method(Method::GET)
            .body_text("{\"q\":1}");
        let augmented = augment_request(options, &FixedTokens(Some("tok")));

        assert!(augmented.headers.is_empty());
        assert_eq!(augmented.body, Some(RequestBody::Text("{\"q\":1}".to_string())));
    }

    #[test]
    fn missing_method_means_get() {
        let augmented = augment_request(RequestOptions::new(), &FixedTokens(Some("tok")));
        assert_eq!(augmented.effective_method(), Method::GET);
        assert!(augmented.headers.is_empty());
    }

    #[test]
    fn method_comparison_ignores_case() {
        let lowercase_get = Method::from_bytes(b"get").unwrap();
        let options = RequestOptions::new().method(lowercase_get);
        let augmented = augment_request(options, &FixedTokens(Some("tok")));
        assert!(augmented.headers.is_empty());
    }

    #[test]
    fn mutating_request_gains_token_and_keeps_caller_headers() {
        let options = RequestOptions::new()
            .method(Method::POST)
            .header(
                HeaderName::from_static("x-requested-with"),
                HeaderValue::from_static("portal"),
            );
        let augmented = augment_request(options, &FixedTokens(Some("tok123")));

        assert_eq!(augmented.headers.get(CSRF_HEADER).unwrap(), "tok123");
        assert_eq!(augmented.headers.get("x-requested-with").unwrap(), "portal");
    }

    #[test]
    fn caller_supplied_token_header_is_replaced() {
        let options = RequestOptions::new()
            .method(Method::DELETE)
            .header(HeaderName::from_static(CSRF_HEADER), HeaderValue::from_static("stale"));
        let augmented = augment_request(options, &FixedTokens(Some("fresh")));

        assert_eq!(augmented.headers.get(CSRF_HEADER).unwrap(), "fresh");
        assert_eq!(augmented.headers.len(), 1);
    }

    #[test]
    fn mutating_request_without_token_gets_no_header() {
        let options = RequestOptions::new().method(Method::POST);
        let augmented = augment_request(options, &FixedTokens(None));
        assert!(augmented.headers.get(CSRF_HEADER).is_none());
    }

    #[test]
    fn text_body_forces_json_content_type() {
        let options = RequestOptions::new()
            .method(Method::POST)
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .body_text("{}");
        let augmented = augment_request(options, &FixedTokens(None));

        assert_eq!(augmented.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn binary_body_keeps_its_content_type() {
        let options = RequestOptions::new()
            .method(Method::POST)
            .body_binary(vec![1, 2, 3]);
        let augmented = augment_request(options, &FixedTokens(Some("tok")));

        assert!(augmented.headers.get(CONTENT_TYPE).is_none());
        assert_eq!(augmented.body, Some(RequestBody::Binary(vec![1, 2, 3])));
    }
}
