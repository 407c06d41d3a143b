//! Cache Key Derivation
//!
//! Builds deterministic cache keys from the caller identity and the request
//! path plus query string. Identical inputs always produce identical keys;
//! differing identity or path produce differing keys.

use axum::http::Uri;

/// Prefix shared by every key this layer writes, so invalidation patterns
/// can scope to cached API responses without touching unrelated keys.
pub const KEY_PREFIX: &str = "api";

// == Caller Identity ==
/// Identity of the requesting user, attached to the request by an upstream
/// authentication layer. Requests without one are keyed as `anonymous`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl CallerIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CallerIdentity {
    fn default() -> Self {
        Self("anonymous".to_string())
    }
}

// == Cache Key ==
/// A derived cache key of the form `api:{identity}:{path?query}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key for a request.
    ///
    /// The full path-and-query is used so that `?page=1` and `?page=2`
    /// cache independently.
    pub fn derive(identity: &CallerIdentity, uri: &Uri) -> Self {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());

        Self(format!(
            "{}:{}:{}",
            KEY_PREFIX,
            identity.as_str(),
            path_and_query
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
