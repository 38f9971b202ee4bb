//! HTTP adapters - REST API implementations.

pub mod eligibility;

use axum::{routing::get, Json, Router};

pub use eligibility::{eligibility_routes, EligibilityHandlers};

/// Composes the full API router.
pub fn api_router(handlers: EligibilityHandlers) -> Router {
    Router::new()
        .nest("/api/flows", eligibility_routes(handlers))
        .route("/api/programs", get(eligibility::list_programs))
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
