//! Response DTOs for the demo API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::middleware::MetricsSnapshot;
use crate::models::Course;

/// Response body for GET /api/courses.
#[derive(Debug, Clone, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
    /// 1-based page served
    pub page: usize,
    /// Total courses in the catalog
    pub total: usize,
}

/// Response body for DELETE /api/courses/:id.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: u64,
}

impl DeleteResponse {
    pub fn new(id: u64) -> Self {
        Self {
            message: format!("Course {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for GET /cache/stats.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub stored: u64,
    pub invalidated: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<MetricsSnapshot> for CacheStatsResponse {
    fn from(snapshot: MetricsSnapshot) -> Self {
        let hit_rate = snapshot.hit_rate();
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            stored: snapshot.stored,
            invalidated: snapshot.invalidated,
            hit_rate,
        }
    }
}

/// Response body for GET /health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
