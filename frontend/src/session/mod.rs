//! Page session state shared between the UI shell and request dispatch.
//!
//! A server-rendered page arrives with metadata fields and a cookie string.
//! The shell stores both in a [`PageContext`] on every navigation; request
//! dispatch and token resolution read them back on demand. Clones share the
//! same underlying state.

pub mod csrf;

pub use csrf::{CsrfToken, PageTokenSource, TokenSource};

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct PageState {
    meta: HashMap<String, String>,
    cookies: String,
}

/// Snapshot of the current page: named metadata fields plus the raw cookie
/// string in `name=value; name2=value2` form.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    state: Arc<RwLock<PageState>>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces a metadata field.
    pub fn set_meta(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut state = self.state.write().unwrap();
        state.meta.insert(name.into(), value.into());
    }

    /// Removes a metadata field.
    pub fn remove_meta(&self, name: &str) {
        let mut state = self.state.write().unwrap();
        state.meta.remove(name);
    }

    /// Looks up a metadata field by name.
    pub fn meta(&self, name: &str) -> Option<String> {
        let state = self.state.read().unwrap();
        state.meta.get(name).cloned()
    }

    /// Replaces the stored cookie string.
    pub fn set_cookies(&self, cookies: impl Into<String>) {
        let mut state = self.state.write().unwrap();
        state.cookies = cookies.into();
    }

    /// The raw cookie string as last stored.
    pub fn cookies(&self) -> String {
        let state = self.state.read().unwrap();
        state.cookies.clone()
    }

    /// Looks up a cookie by name in the stored cookie string.
    ///
    /// Pairs are separated by `;` and split on the first `=`. Values are
    /// URL-decoded; a value that fails to decode is returned raw.
    pub fn cookie(&self, name: &str) -> Option<String> {
        let state = self.state.read().unwrap();
        state.cookies.split(';').find_map(|pair| {
            let parts: Vec<&str> = pair.trim().splitn(2, '=').collect();
            if parts.len() == 2 && parts[0] == name {
                Some(match urlencoding::decode(parts[1]) {
                    Ok(decoded) => decoded.into_owned(),
                    Err(_) => parts[1].to_string(),
                })
            } else {
                None
            }
        })
    }
}
