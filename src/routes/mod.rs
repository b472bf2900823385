use axum::{Router, routing::get};

use crate::state::AppState;

pub mod audits;
pub mod doc;
pub mod health;
pub mod params;
pub mod relations;
pub mod resource;
pub mod resources;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness))
        .merge(resources::router())
        .merge(relations::router())
        .merge(audits::router())
}
