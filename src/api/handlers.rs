//! API Handlers
//!
//! Handlers for the demo course-catalog API and the health/stats
//! endpoints. The catalog is a plain in-memory map; it exists to exercise
//! the cache middleware, which never looks inside it.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::{CacheError, Result};
use crate::middleware::CacheMetrics;
use crate::models::{
    CacheStatsResponse, Course, CourseListResponse, CreateCourseRequest, DeleteResponse,
    HealthResponse, UpdateCourseRequest,
};
use crate::store::SharedStore;

/// Courses returned per list page.
pub const PAGE_SIZE: usize = 20;

// == Course Catalog ==
/// In-memory course storage backing the demo routes.
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: BTreeMap<u64, Course>,
    next_id: u64,
}

impl CourseCatalog {
    pub fn insert(&mut self, req: CreateCourseRequest) -> Course {
        self.next_id += 1;
        let course = Course {
            id: self.next_id,
            title: req.title,
            description: req.description,
            price: req.price,
        };
        self.courses.insert(course.id, course.clone());
        course
    }

    pub fn page(&self, page: usize) -> (Vec<Course>, usize) {
        let courses = self
            .courses
            .values()
            .skip(page.saturating_sub(1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();
        (courses, self.courses.len())
    }

    pub fn get(&self, id: u64) -> Option<Course> {
        self.courses.get(&id).cloned()
    }

    pub fn update(&mut self, id: u64, req: UpdateCourseRequest) -> Option<Course> {
        let course = self.courses.get_mut(&id)?;
        if let Some(title) = req.title {
            course.title = title;
        }
        if let Some(description) = req.description {
            course.description = description;
        }
        if let Some(price) = req.price {
            course.price = price;
        }
        Some(course.clone())
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.courses.remove(&id).is_some()
    }
}

// == Application State ==
/// Shared state: the store and metrics consumed by the cache middleware,
/// plus the demo catalog.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub metrics: CacheMetrics,
    pub catalog: Arc<RwLock<CourseCatalog>>,
    /// TTL in seconds applied to cached read responses
    pub cache_ttl: u64,
}

impl AppState {
    pub fn new(store: SharedStore, cache_ttl: u64) -> Self {
        Self {
            store,
            metrics: CacheMetrics::new(),
            catalog: Arc::new(RwLock::new(CourseCatalog::default())),
            cache_ttl,
        }
    }
}

// == List Params ==
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<usize>,
}

/// Handler for GET /api/courses
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<CourseListResponse> {
    let page = params.page.unwrap_or(1).max(1);
    let catalog = state.catalog.read().await;
    let (courses, total) = catalog.page(page);

    Json(CourseListResponse {
        courses,
        page,
        total,
    })
}

/// Handler for GET /api/courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Course>> {
    let catalog = state.catalog.read().await;
    catalog
        .get(id)
        .map(Json)
        .ok_or_else(|| CacheError::NotFound(format!("Course {}", id)))
}

/// Handler for POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>)> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut catalog = state.catalog.write().await;
    let course = catalog.insert(req);

    Ok((StatusCode::CREATED, Json(course)))
}

/// Handler for PUT /api/courses/:id
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Json<Course>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut catalog = state.catalog.write().await;
    catalog
        .update(id, req)
        .map(Json)
        .ok_or_else(|| CacheError::NotFound(format!("Course {}", id)))
}

/// Handler for DELETE /api/courses/:id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    let mut catalog = state.catalog.write().await;
    if catalog.remove(id) {
        Ok(Json(DeleteResponse::new(id)))
    } else {
        Err(CacheError::NotFound(format!("Course {}", id)))
    }
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.metrics.snapshot().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
