use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::constants::{
    ERR_INSIGHT_NOT_FOUND, ERR_INVALID_INSIGHT_ID, ERR_INVALID_INSIGHT_TYPE, ERR_INVALID_USER_ID,
};
use crate::error::{AppError, Result};
use crate::models::{Insight, InsightType, InsightUpdate};
use crate::routes::parse_uuid;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateInsightRequest {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub insight_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInsightRequest {
    #[serde(rename = "type")]
    pub insight_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data: String,
}

/// Create a new insight
///
/// The type must be one of the accepted set; the id is generated server-side.
pub async fn create_insight(
    State(state): State<AppState>,
    Json(payload): Json<CreateInsightRequest>,
) -> Result<(StatusCode, Json<Insight>)> {
    let insight_type = InsightType::parse(&payload.insight_type)
        .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_INSIGHT_TYPE.to_string()))?;

    let insight = Insight::new(
        payload.user_id,
        insight_type,
        payload.title,
        payload.description,
        payload.data,
    );
    state.store.create_insight(&insight).await?;

    tracing::info!("Created insight {} for user {}", insight.id, insight.user_id);

    Ok((StatusCode::CREATED, Json(insight)))
}

/// Retrieve an insight by id
pub async fn get_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Insight>> {
    let insight_id = parse_uuid(&id, ERR_INVALID_INSIGHT_ID)?;

    let insight = state
        .store
        .get_insight(insight_id)
        .await?
        .ok_or_else(|| AppError::NotFound(ERR_INSIGHT_NOT_FOUND.to_string()))?;

    Ok(Json(insight))
}

/// Retrieve all insights owned by a user, newest first
///
/// A user without insights yields an empty list, not a 404.
pub async fn get_user_insights(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Insight>>> {
    let user_id = parse_uuid(&user_id, ERR_INVALID_USER_ID)?;

    let insights = state.store.get_user_insights(user_id).await?;

    Ok(Json(insights))
}

/// Update an existing insight
pub async fn update_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateInsightRequest>,
) -> Result<Json<Insight>> {
    let insight_id = parse_uuid(&id, ERR_INVALID_INSIGHT_ID)?;

    let insight_type = InsightType::parse(&payload.insight_type)
        .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_INSIGHT_TYPE.to_string()))?;

    let update = InsightUpdate {
        insight_type,
        title: payload.title,
        description: payload.description,
        data: payload.data,
    };

    let insight = state
        .store
        .update_insight(insight_id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound(ERR_INSIGHT_NOT_FOUND.to_string()))?;

    Ok(Json(insight))
}

/// Delete an insight
pub async fn delete_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let insight_id = parse_uuid(&id, ERR_INVALID_INSIGHT_ID)?;

    let deleted = state.store.delete_insight(insight_id).await?;
    if !deleted {
        return Err(AppError::NotFound(ERR_INSIGHT_NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
