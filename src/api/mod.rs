//! API Module
//!
//! Demo course-catalog API exercising the cache layer.
//!
//! # Endpoints
//! - `GET /api/courses` - Paginated course list (cached)
//! - `GET /api/courses/:id` - Course detail (cached)
//! - `POST /api/courses` - Create a course (invalidates)
//! - `PUT /api/courses/:id` - Update a course (invalidates)
//! - `DELETE /api/courses/:id` - Delete a course (invalidates)
//! - `GET /cache/stats` - Cache counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, CourseCatalog, PAGE_SIZE};
pub use routes::{create_router, COURSE_INVALIDATION_PATTERN};
