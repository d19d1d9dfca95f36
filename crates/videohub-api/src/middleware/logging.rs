//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Logs request method, route, addressed video, status, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        path = %path,
        route = route.as_deref().unwrap_or("-"),
        video_id = video_id_segment(&path).unwrap_or("-"),
        status = %status.as_u16(),
        duration_ms = %duration.as_millis(),
        "HTTP request"
    );

    response
}

/// The raw id segment of a `/videos/{id}` path, unparsed.
fn video_id_segment(path: &str) -> Option<&str> {
    path.strip_prefix("/videos/")
        .filter(|id| !id.is_empty() && !id.contains('/'))
}
