//! Axum routes for the kinship service.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::Relationship;
use crate::{KINSHIP_SCHEMA_VERSION, VOCABULARY_VERSION};

use super::state::ServiceState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to resolve a kinship chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipRequest {
    /// Ordered step tokens, e.g. `["mother", "brother"]`. May be empty.
    pub steps: Vec<String>,
}

/// Simple message envelope for the banner endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Banner text.
    pub message: String,
}

/// Service health response (detailed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" when serving.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Schema version of the result types.
    pub schema_version: String,
    /// Version of the built-in vocabulary.
    pub vocabulary_version: String,
    /// Number of accepted surface forms in the vocabulary.
    pub vocabulary_size: usize,
    /// Fingerprint of the vocabulary contents.
    pub vocabulary_fingerprint: String,
}

/// Simple liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    /// "alive" when the process is running.
    pub status: String,
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Whether the service can accept traffic.
    pub ready: bool,
    /// Optional human-readable detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Environment diagnostic response.
///
/// Reports process status and whether database-related environment variables
/// are present. Only presence is reported; values are never echoed or logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    /// Process status.
    pub backend: String,
    /// Whether a database is in use (it is not).
    pub database: String,
    /// "set" / "not set" for `DATABASE_URL`.
    pub database_url: String,
    /// "set" / "not set" for `DATABASE_NAME`.
    pub database_name: String,
    /// Connection status (always "not connected").
    pub connection_status: String,
    /// Collections in use (always empty).
    pub collections: Vec<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Resolve a kinship chain into a relationship.
///
/// Infallible at the domain level: every well-formed request body yields a
/// 200 with a result, falling back to "unknown / ambiguous" for chains that
/// map to no common English term. Malformed bodies are rejected by axum's
/// JSON extractor before this handler runs.
async fn relationship_handler(
    State(state): State<Arc<ServiceState>>,
    Json(request): Json<RelationshipRequest>,
) -> Json<Relationship> {
    let start = std::time::Instant::now();
    let relationship = state.resolver.resolve(&request.steps);
    super::middleware::record_resolution_metrics(
        request.steps.len(),
        relationship.kind,
        start.elapsed().as_millis() as u64,
    );
    Json(relationship)
}

/// Root banner.
async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Kinship Calculator Backend Running".to_string(),
    })
}

/// Hello banner.
async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

/// Environment diagnostics.
async fn diagnostics_handler() -> Json<DiagnosticsResponse> {
    let presence = |var: &str| {
        if std::env::var(var).is_ok_and(|v| !v.is_empty()) {
            "set".to_string()
        } else {
            "not set".to_string()
        }
    };

    Json(DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not used".to_string(),
        database_url: presence("DATABASE_URL"),
        database_name: presence("DATABASE_NAME"),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    })
}

/// Health check endpoint (detailed).
async fn health_handler(State(state): State<Arc<ServiceState>>) -> Json<HealthResponse> {
    let vocabulary = state.vocabulary();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: KINSHIP_SCHEMA_VERSION.to_string(),
        vocabulary_version: VOCABULARY_VERSION.to_string(),
        vocabulary_size: vocabulary.len(),
        vocabulary_fingerprint: vocabulary.fingerprint().to_string(),
    })
}

/// Liveness probe endpoint.
async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// The resolver has no external dependencies, so readiness follows liveness.
async fn readiness_handler() -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        ready: true,
        details: None,
    })
}

// ============================================================================
// Router Construction
// ============================================================================

/// Create the Axum router for the kinship service.
pub fn create_router(state: ServiceState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Resolution
        .route("/api/relationship", post(relationship_handler))
        // Banners and diagnostics
        .route("/", get(root_handler))
        .route("/api/hello", get(hello_handler))
        .route("/test", get(diagnostics_handler))
        // Health checks
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::types::RelationKind;

    fn router() -> Router {
        create_router(ServiceState::default())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_relationship_endpoint() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/relationship")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"steps": ["mother", "brother"]}"#))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["label"], "uncle");
        assert_eq!(json["type"], "blood");
    }

    #[tokio::test]
    async fn test_relationship_response_round_trips() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/relationship")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"steps": ["spouse"]}"#))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let rel: Relationship = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(rel.label, "spouse");
        assert_eq!(rel.kind, RelationKind::Affinal);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/relationship")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"not_steps": 1}"#))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health_reports_vocabulary() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["schema_version"], KINSHIP_SCHEMA_VERSION);
        assert!(json["vocabulary_size"].as_u64().unwrap() > 12);
    }

    #[tokio::test]
    async fn test_probes() {
        for (uri, key, expected) in [
            ("/health/live", "status", serde_json::json!("alive")),
            ("/health/ready", "ready", serde_json::json!(true)),
        ] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = router().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json[key], expected, "probe {uri}");
        }
    }
}
