//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the GitHub-backed operations, independent of HTTP
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and mapping from upstream records
//! - `errors.rs`: the error envelope

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use gitstats_core::{AppConfig, GitHubApi};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(config: &AppConfig, github: Arc<dyn GitHubApi>) -> Router {
    let services = Arc::new(services::AppServices::new(config, github));
    tracing::debug!(owner = services.owner(), "services wired");

    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::log_request))
            .layer(middleware::cors_layer(&config.cors_origins))
            .layer(Extension(services)),
    )
}
