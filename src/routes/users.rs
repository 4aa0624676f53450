use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::constants::{ERR_EMAIL_REQUIRED, ERR_INVALID_USER_ID, ERR_USER_NOT_FOUND};
use crate::error::{AppError, Result};
use crate::models::User;
use crate::routes::parse_uuid;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Create a new user
///
/// The id is generated server-side; anything the client sends for it is
/// ignored.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    if payload.email.trim().is_empty() {
        return Err(AppError::InvalidInput(ERR_EMAIL_REQUIRED.to_string()));
    }

    let user = User::new(payload.email, payload.name);
    state.store.create_user(&user).await?;

    tracing::info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Retrieve a user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let user_id = parse_uuid(&id, ERR_INVALID_USER_ID)?;

    let user = state
        .store
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

    Ok(Json(user))
}
