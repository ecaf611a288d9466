//! Kinship REST Service
//!
//! Exposes the relationship resolver as a REST API.
//!
//! ## Endpoints
//!
//! - `POST /api/relationship` - Resolve a kinship step chain
//! - `GET /` - Root banner
//! - `GET /api/hello` - Hello banner
//! - `GET /test` - Environment diagnostics
//! - `GET /health` - Detailed service health check
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::{metrics_middleware, record_resolution_metrics};
pub use routes::{create_router, RelationshipRequest};
pub use state::ServiceState;
