//! Read-Through Cache Middleware
//!
//! Intercepts GET requests: serves the stored response on a hit, otherwise
//! runs the downstream handler and captures its successful JSON response
//! into the store. The cache is strictly best-effort; no store failure is
//! ever surfaced to the caller.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::key::{CacheKey, CallerIdentity};
use crate::middleware::CacheMetrics;
use crate::store::{SharedStore, MAX_VALUE_SIZE};

/// TTL applied when a policy does not specify one.
pub const DEFAULT_TTL_SECONDS: u64 = 300;

// == Cache Policy ==
/// Per-route configuration for the read-through middleware.
///
/// Attach with `axum::middleware::from_fn_with_state(policy, read_through)`.
#[derive(Clone)]
pub struct CachePolicy {
    pub(crate) store: SharedStore,
    pub(crate) ttl: u64,
    pub(crate) metrics: CacheMetrics,
}

impl CachePolicy {
    /// Creates a policy with the default 300 second TTL.
    pub fn new(store: SharedStore, metrics: CacheMetrics) -> Self {
        Self {
            store,
            ttl: DEFAULT_TTL_SECONDS,
            metrics,
        }
    }

    /// Overrides the TTL for routes cached by this policy.
    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl = ttl_seconds;
        self
    }
}

// == Read-Through Middleware ==
/// Serves cached responses for GET requests and captures cacheable misses.
///
/// Mutating methods bypass the cache entirely, including the lookup:
/// caching a mutating request's result could replay a stale success to a
/// retried write.
pub async fn read_through(
    State(policy): State<CachePolicy>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let identity = req
        .extensions()
        .get::<CallerIdentity>()
        .cloned()
        .unwrap_or_default();
    let key = CacheKey::derive(&identity, req.uri());

    match policy.store.get(key.as_str()).await {
        Ok(Some(cached)) => {
            policy.metrics.record_hit();
            debug!(key = %key, "cache hit");
            return replay(cached);
        }
        Ok(None) => {}
        // Store trouble degrades to a miss; the request must never block
        // on cache infrastructure.
        Err(err) => {
            warn!(key = %key, error = %err, "cache lookup failed, treating as miss");
        }
    }
    policy.metrics.record_miss();

    let response = next.run(req).await;

    // Only successful JSON responses are cached.
    if !response.status().is_success() || !is_json(response.headers()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if bytes.len() <= MAX_VALUE_SIZE {
        // Fire-and-forget: the client response does not wait on the store
        // write, and a write failure is logged, never joined.
        let store = policy.store.clone();
        let metrics = policy.metrics.clone();
        let value = bytes.to_vec();
        let ttl = policy.ttl;
        tokio::spawn(async move {
            match store.set(key.as_str(), value, ttl).await {
                Ok(()) => {
                    metrics.record_store();
                    debug!(key = %key, ttl, "cached response");
                }
                Err(err) => warn!(key = %key, error = %err, "cache write failed"),
            }
        });
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Rebuilds a response from stored body bytes. Entries are only ever
/// written for 2xx JSON responses, so the replay is 200 application/json.
fn replay(cached: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        cached,
    )
        .into_response()
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
