//! Middleware Module
//!
//! The cache layer proper: read-through interception for read routes, a
//! pattern-based invalidation wrapper for write routes, caller identity
//! extraction, and shared cache metrics.

mod identity;
mod invalidate;
mod metrics;
mod read_cache;

pub use identity::{attach_identity, USER_ID_HEADER};
pub use invalidate::{invalidate, InvalidationPolicy};
pub use metrics::{CacheMetrics, MetricsSnapshot};
pub use read_cache::{read_through, CachePolicy, DEFAULT_TTL_SECONDS};
