use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// Used by load balancers and monitoring systems.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
