//! Course DTOs for the demo catalog API
//!
//! Defines the course resource served by the cached read routes and the
//! request bodies accepted by the invalidating write routes.

use serde::{Deserialize, Serialize};

// == Course ==
/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Catalog-assigned identifier
    pub id: u64,
    /// Course title
    pub title: String,
    /// Course description
    pub description: String,
    /// Price in the platform currency
    pub price: f64,
}

// == Create Request ==
/// Request body for POST /api/courses.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

impl CreateCourseRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title required".to_string());
        }
        if self.price < 0.0 {
            return Some("Price must be positive".to_string());
        }
        None
    }
}

// == Update Request ==
/// Request body for PUT /api/courses/:id. Absent fields keep their value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Option<String> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Some("Title cannot be empty".to_string());
        }
        if self.price.is_some_and(|p| p < 0.0) {
            return Some("Price must be positive".to_string());
        }
        None
    }
}
