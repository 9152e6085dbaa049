//! Prometheus metrics for the render service.

use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "shortreel_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "shortreel_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "shortreel_http_requests_in_flight";

    // Render metrics
    pub const RENDERS_COMPLETED_TOTAL: &str = "shortreel_renders_completed_total";
    pub const RENDERS_FAILED_TOTAL: &str = "shortreel_renders_failed_total";
    pub const RENDERS_REJECTED_TOTAL: &str = "shortreel_renders_rejected_total";
    pub const RENDER_DURATION_SECONDS: &str = "shortreel_render_duration_seconds";
    pub const RENDER_OUTPUT_BYTES: &str = "shortreel_render_output_bytes";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a completed render.
pub fn record_render_completed(duration_secs: f64, size_bytes: usize) {
    counter!(names::RENDERS_COMPLETED_TOTAL).increment(1);
    histogram!(names::RENDER_DURATION_SECONDS).record(duration_secs);
    histogram!(names::RENDER_OUTPUT_BYTES).record(size_bytes as f64);
}

/// Record a failed render.
pub fn record_render_failed(duration_secs: f64) {
    counter!(names::RENDERS_FAILED_TOTAL).increment(1);
    histogram!(names::RENDER_DURATION_SECONDS).record(duration_secs);
}

/// Record a request rejected before the renderer was invoked.
pub fn record_render_rejected() {
    counter!(names::RENDERS_REJECTED_TOTAL).increment(1);
}

/// Metrics middleware for HTTP requests.
///
/// The route table is fixed (no path parameters), so raw paths are safe as
/// label values.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
