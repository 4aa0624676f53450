pub mod financial;
pub mod health;
pub mod insights;
pub mod users;

pub use financial::{fetch_cost_of_living, sync_transactions};
pub use health::health_check;
pub use insights::{
    create_insight, delete_insight, get_insight, get_user_insights, update_insight,
};
pub use users::{create_user, get_user};

use axum::{
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::AppState;

/// Build the application router with every route bound to the shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(create_user))
        .route("/users/:user_id", get(get_user))
        .route("/users/:user_id/insights", get(get_user_insights))
        .route("/insights", post(create_insight))
        .route(
            "/insights/:id",
            get(get_insight).put(update_insight).delete(delete_insight),
        )
        .route("/sync-transactions", post(sync_transactions))
        .route("/fetch-cost-of-living", post(fetch_cost_of_living))
        .with_state(state)
}

/// Parse a path segment as a UUID, mapping failure to a 400 with `message`
pub(crate) fn parse_uuid(value: &str, message: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|_| AppError::InvalidInput(message.to_string()))
}
