//! Request logging.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Log every request with its outcome and latency. Upstream Steam calls make
/// latency the interesting number here.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_success() {
        info!(%method, %path, %status, elapsed_ms, "Request served");
    } else {
        warn!(%method, %path, %status, elapsed_ms, "Request failed");
    }

    response
}
