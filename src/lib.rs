//! Readthrough - a read-through HTTP response cache layer
//!
//! Caches successful GET responses per caller identity with a TTL, and
//! purges matching entries after successful writes. Backed by Redis or an
//! in-memory store; cache failures never fail requests.

pub mod api;
pub mod config;
pub mod error;
pub mod key;
pub mod middleware;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use key::{CacheKey, CallerIdentity};
pub use middleware::{CacheMetrics, CachePolicy, InvalidationPolicy};
pub use store::{MemoryStore, RedisStore, SharedStore, Store};
pub use tasks::spawn_cleanup_task;
