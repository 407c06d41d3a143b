//! Cache Invalidation Middleware
//!
//! Wraps mutating routes: after the handler produces a successful
//! response, every registered pattern is deleted from the store before the
//! response is returned, so a read issued right after a successful write
//! observes fresh data. Failed writes never purge anything.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::middleware::CacheMetrics;
use crate::store::SharedStore;

// == Invalidation Policy ==
/// Per-route configuration for the invalidation middleware.
///
/// Attach with `axum::middleware::from_fn_with_state(policy, invalidate)`.
#[derive(Clone)]
pub struct InvalidationPolicy {
    pub(crate) store: SharedStore,
    pub(crate) patterns: Arc<[String]>,
    pub(crate) metrics: CacheMetrics,
}

impl InvalidationPolicy {
    pub fn new(store: SharedStore, patterns: Vec<String>, metrics: CacheMetrics) -> Self {
        Self {
            store,
            patterns: patterns.into(),
            metrics,
        }
    }
}

// == Invalidation Middleware ==
/// Purges pattern-matching cache entries after a successful write.
///
/// Deletion is awaited before the response is handed back, but a deletion
/// failure only logs: the write already succeeded and its response must
/// reach the client unaltered. Multi-pattern deletion is not atomic;
/// a partial purge is tolerated and bounded by entry TTLs.
pub async fn invalidate(
    State(policy): State<InvalidationPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;

    if response.status().is_success() {
        for pattern in policy.patterns.iter() {
            match policy.store.delete_pattern(pattern).await {
                Ok(removed) => {
                    policy.metrics.record_invalidated(removed);
                    debug!(pattern = %pattern, removed, "cache invalidated");
                }
                Err(err) => {
                    warn!(pattern = %pattern, error = %err, "cache invalidation failed");
                }
            }
        }
    }

    response
}
