//! Key-Value Store Module
//!
//! The store abstraction consumed by the cache middleware, with an
//! in-memory backend (tests, single-process deployments) and a Redis
//! backend (shared deployments). Both honor the same contract: one live
//! value per key, TTL-bounded, glob-pattern deletion.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

mod entry;
mod memory;
mod pattern;
mod redis_store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryStore;
pub use pattern::key_matches;
pub use redis_store::RedisStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Store Trait ==
/// Asynchronous key-value store with per-entry TTL and glob-pattern
/// deletion.
///
/// Implementations must be safe for concurrent use by many simultaneous
/// requests; all failures are returned as errors, never panics, so the
/// middleware can degrade to a cache miss.
#[async_trait]
pub trait Store: Send + Sync {
    /// Looks up a key. Returns `None` for absent or expired entries.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores a value under a key, replacing any prior value, expiring
    /// after `ttl_seconds`.
    async fn set(&self, key: &str, value: Vec<u8>, ttl_seconds: u64) -> Result<()>;

    /// Deletes every key matching the glob `pattern`. Returns the number
    /// of keys removed.
    async fn delete_pattern(&self, pattern: &str) -> Result<u64>;
}

/// Shared handle to a store backend.
pub type SharedStore = Arc<dyn Store>;
