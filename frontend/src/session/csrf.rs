//! Anti-forgery token resolution.
//!
//! The portal exposes its CSRF token in two places on every rendered page:
//! a `csrf-token` metadata field and, as a fallback, a `csrf_token` cookie.
//! The metadata field wins when both are present. Tokens are resolved fresh
//! for every request so a token rotated mid-session is picked up without
//! any invalidation step.

use super::PageContext;
use std::fmt;

/// Metadata field carrying the token on server-rendered pages.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Cookie the server sets alongside the session as a fallback.
pub const CSRF_COOKIE_NAME: &str = "csrf_token";

/// Opaque anti-forgery credential for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the anti-forgery token for outbound requests comes from.
///
/// Absence is not an error: a request without a token is dispatched without
/// the header and the server decides whether to reject it.
pub trait TokenSource: Send + Sync {
    fn csrf_token(&self) -> Option<CsrfToken>;
}

/// Resolves the token from the current page, metadata field first, cookie
/// second. An empty value in either place counts as absent.
#[derive(Debug, Clone)]
pub struct PageTokenSource {
    context: PageContext,
}

impl PageTokenSource {
    pub fn new(context: PageContext) -> Self {
        Self { context }
    }
}

impl TokenSource for PageTokenSource {
    fn csrf_token(&self) -> Option<CsrfToken> {
        let value = match self.context.meta(CSRF_META_NAME) {
            Some(meta) => Some(meta),
            None => self.context.cookie(CSRF_COOKIE_NAME),
        };
        value.filter(|v| !v.is_empty()).map(CsrfToken::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_meta_field_over_cookie() {
        let context = PageContext::new();
        context.set_meta(CSRF_META_NAME, "from-meta");
        context.set_cookies("csrf_token=from-cookie");

        let source = PageTokenSource::new(context);
        assert_eq!(source.csrf_token(), Some(CsrfToken::new("from-meta")));
    }

    #[test]
    fn falls_back_to_cookie() {
        let context = PageContext::new();
        context.set_cookies("session=xyz; csrf_token=from-cookie");

        let source = PageTokenSource::new(context);
        assert_eq!(source.csrf_token(), Some(CsrfToken::new("from-cookie")));
    }

    #[test]
    fn resolves_none_when_page_has_no_token() {
        let source = PageTokenSource::new(PageContext::new());
        assert_eq!(source.csrf_token(), None);
    }

    #[test]
    fn empty_meta_value_counts_as_absent() {
        let context = PageContext::new();
        context.set_meta(CSRF_META_NAME, "");
        context.set_cookies("csrf_token=from-cookie");

        // An empty metadata field still shadows the cookie.
        let source = PageTokenSource::new(context);
        assert_eq!(source.csrf_token(), None);
    }

    #[test]
    fn rotated_token_is_seen_by_the_next_resolution() {
        let context = PageContext::new();
        context.set_meta(CSRF_META_NAME, "first");

        let source = PageTokenSource::new(context.clone());
        assert_eq!(source.csrf_token(), Some(CsrfToken::new("first")));

        context.set_meta(CSRF_META_NAME, "second");
        assert_eq!(source.csrf_token(), Some(CsrfToken::new("second")));
    }
}
