use axum::{routing::get, Router};

pub mod github;
pub mod system;

/// Router for every endpoint of the service.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(github::router())
        .fallback(system::not_found)
}
