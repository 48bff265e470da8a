//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - Observability: request IDs, tracing spans, redacted cookies.
//! - Recovery: request timeouts and panics become JSON error responses.
//! - Specification: OpenAPI JSON and the Scalar reference UI.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aide::axum::ApiRouter;
//! use keyrace_server::middleware::{
//!     OpenApiConfig, RecoveryConfig, RouterObservabilityExt, RouterOpenApiExt,
//!     RouterRecoveryExt,
//! };
//!
//! let app: axum::Router = ApiRouter::new()
//!     .with_open_api(OpenApiConfig::default())
//!     .with_observability()
//!     .with_recovery(&RecoveryConfig::default());
//! ```

mod observability;
mod recovery;
mod specification;

pub use observability::{RouterObservabilityExt, log_requests};
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use specification::{OpenApiConfig, RouterOpenApiExt};
