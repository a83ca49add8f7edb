//! Client configuration read from the environment.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PAGE_LIMIT: usize = 10;

pub const BASE_URL_VAR: &str = "TODO_API_BASE_URL";
pub const PAGE_LIMIT_VAR: &str = "TODO_PAGE_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root; the client appends `/todos`.
    pub base_url: String,
    /// Number of items requested on load.
    pub page_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Read `TODO_API_BASE_URL` and `TODO_PAGE_LIMIT`, falling back to the
    /// defaults for unset, blank, or unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.base_url);
        let page_limit = match lookup(PAGE_LIMIT_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unparsable {PAGE_LIMIT_VAR}");
                defaults.page_limit
            }),
            None => defaults.page_limit,
        };
        Self { base_url, page_limit }
    }
}
