//! API Routes
//!
//! Wires the demo course API with the cache middleware: read routes
//! behind the read-through policy, write routes behind the invalidation
//! policy, identity extraction ahead of both.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::{
    attach_identity, invalidate, read_through, CachePolicy, InvalidationPolicy,
};

use super::handlers::{
    create_course, delete_course, get_course, health_handler, list_courses, stats_handler,
    update_course, AppState,
};

/// Glob purged whenever a course write succeeds: every user's cached
/// course reads, list pages and detail views alike.
pub const COURSE_INVALIDATION_PATTERN: &str = "api:*:/api/courses*";

/// Creates the main router with the cache layer attached.
///
/// # Endpoints
/// - `GET /api/courses` - Paginated course list (cached)
/// - `GET /api/courses/:id` - Course detail (cached)
/// - `POST /api/courses` - Create a course (invalidates course reads)
/// - `PUT /api/courses/:id` - Update a course (invalidates course reads)
/// - `DELETE /api/courses/:id` - Delete a course (invalidates course reads)
/// - `GET /cache/stats` - Cache hit/miss counters
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cache = CachePolicy::new(state.store.clone(), state.metrics.clone())
        .with_ttl(state.cache_ttl);
    let invalidation = InvalidationPolicy::new(
        state.store.clone(),
        vec![COURSE_INVALIDATION_PATTERN.to_string()],
        state.metrics.clone(),
    );

    let reads = Router::new()
        .route("/api/courses", get(list_courses))
        .route("/api/courses/:id", get(get_course))
        .route_layer(middleware::from_fn_with_state(cache, read_through));

    let writes = Router::new()
        .route("/api/courses", post(create_course))
        .route("/api/courses/:id", put(update_course))
        .route("/api/courses/:id", delete(delete_course))
        .route_layer(middleware::from_fn_with_state(invalidation, invalidate));

    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(reads)
        .merge(writes)
        .route("/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(attach_identity))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
