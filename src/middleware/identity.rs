//! Caller Identity Extraction
//!
//! Attaches a `CallerIdentity` extension from the `x-user-id` header,
//! standing in for a full authentication layer. Requests without the
//! header stay anonymous and share the anonymous cache key space.

use axum::{
    extract::Request,
    http::HeaderName,
    middleware::Next,
    response::Response,
};

use crate::key::CallerIdentity;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");

// == Identity Middleware ==
/// Inserts the caller identity into request extensions when present.
pub async fn attach_identity(mut req: Request, next: Next) -> Response {
    if let Some(user) = req
        .headers()
        .get(&USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|user| !user.is_empty())
    {
        let identity = CallerIdentity::new(user);
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}
