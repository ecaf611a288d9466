//! Service middleware for request metrics.
//!
//! ## Metrics Exposed
//!
//! - `kinship_requests_total` - request counts by path, method, status
//! - `kinship_request_duration_seconds` - request latency
//! - `kinship_resolutions_total` - resolutions by relation kind
//!
//! Metrics are emitted as structured log events under the
//! `kinship_kernel::metrics` target and aggregated downstream.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

use crate::types::RelationKind;

/// Metrics middleware that records request counts and latency.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();

    info!(
        target: "kinship_kernel::metrics",
        metric_type = "request",
        path = %path,
        method = %method,
        status = status,
        latency_ms = latency.as_millis() as u64,
        "request_metric"
    );

    response
}

/// Record resolution metrics.
///
/// Call this after resolving a chain to track step counts and outcomes.
pub fn record_resolution_metrics(step_count: usize, kind: RelationKind, latency_ms: u64) {
    info!(
        target: "kinship_kernel::metrics",
        metric_type = "resolution",
        step_count = step_count,
        kind = %kind,
        latency_ms = latency_ms,
        "resolution_metric"
    );
}
