//! Models Module
//!
//! DTOs for the demo course API and the cache stats/health endpoints.

mod course;
mod responses;

pub use course::{Course, CreateCourseRequest, UpdateCourseRequest};
pub use responses::{CacheStatsResponse, CourseListResponse, DeleteResponse, HealthResponse};
