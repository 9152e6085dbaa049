//! Axum HTTP adapter for the render service.
//!
//! This crate provides:
//! - A single `POST /render` route with body-level success/failure
//! - Liveness and readiness probes
//! - Prometheus metrics
//! - Request ID, request logging, and security header middleware

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use routes::create_router;
pub use state::AppState;
