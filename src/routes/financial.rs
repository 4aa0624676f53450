use axum::{extract::State, Json};
use chrono::{Months, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    ERR_BANKING_FETCH_FAILED, ERR_CITY_REQUIRED, ERR_COST_OF_LIVING_FETCH_FAILED,
    ERR_INVALID_ACCESS_TOKEN, ERR_INVALID_USER_ID, ERR_USER_NOT_FOUND, FALLBACK_CATEGORY,
};
use crate::error::{AppError, Result};
use crate::models::Transaction;
use crate::providers::{AnalysisProvider, GatewayError};
use crate::routes::parse_uuid;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SyncTransactionsRequest {
    pub user_id: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct SyncTransactionsResponse {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CostOfLivingRequest {
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct CostOfLivingResponse {
    pub city: String,
    pub prices: Value,
}

/// Sync a user's recent transactions from the banking aggregator
///
/// Fetches a trailing one-month window and persists one row per upstream
/// transaction, with the amount normalized to a magnitude and the category
/// taken from the first source label. A store failure mid-loop fails the
/// request; rows already inserted stay committed.
pub async fn sync_transactions(
    State(state): State<AppState>,
    Json(payload): Json<SyncTransactionsRequest>,
) -> Result<Json<SyncTransactionsResponse>> {
    // 1. Validate the user before touching the aggregator
    let user_id = parse_uuid(&payload.user_id, ERR_INVALID_USER_ID)?;

    let user = state
        .store
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

    // 2. Fetch the trailing one-month window
    let end_date = Utc::now().date_naive();
    let start_date = end_date
        .checked_sub_months(Months::new(1))
        .unwrap_or(end_date);

    let fetched = state
        .banking
        .fetch_transactions(&payload.access_token, start_date, end_date)
        .await
        .map_err(|err| match err {
            GatewayError::InvalidCredential => {
                AppError::Unauthorized(ERR_INVALID_ACCESS_TOKEN.to_string())
            }
            err => {
                tracing::error!("Banking provider request failed: {err}");
                AppError::Upstream(ERR_BANKING_FETCH_FAILED.to_string())
            }
        })?;

    // 3. Normalize and persist each transaction
    let mut count = 0;
    for source in fetched {
        let category = match source.category.first() {
            Some(label) => label.clone(),
            None => classify_description(state.analysis.as_ref(), &source.name).await,
        };

        let transaction =
            Transaction::imported(user.id, source.amount, category, source.name, source.date);
        state.store.create_transaction(&transaction).await?;
        count += 1;
    }

    tracing::info!("Synced {} transactions for user {}", count, user.id);

    Ok(Json(SyncTransactionsResponse {
        status: "success".to_string(),
        count,
    }))
}

/// Classify an unlabeled transaction via the analysis service
///
/// A classification failure does not fail the sync; the row falls back to a
/// fixed category.
async fn classify_description(analysis: &dyn AnalysisProvider, description: &str) -> String {
    match analysis.analyze_transaction(description).await {
        Ok(result) => result.category,
        Err(err) => {
            tracing::warn!("Analysis service could not classify {description:?}: {err}");
            FALLBACK_CATEGORY.to_string()
        }
    }
}

/// Fetch cost-of-living data for a city and store the snapshot
pub async fn fetch_cost_of_living(
    State(state): State<AppState>,
    Json(payload): Json<CostOfLivingRequest>,
) -> Result<Json<CostOfLivingResponse>> {
    let city = payload.city.trim();
    if city.is_empty() {
        return Err(AppError::InvalidInput(ERR_CITY_REQUIRED.to_string()));
    }

    let prices = state.pricing.fetch_city_prices(city).await.map_err(|err| {
        tracing::error!("Pricing provider request failed for {city}: {err}");
        AppError::Upstream(ERR_COST_OF_LIVING_FETCH_FAILED.to_string())
    })?;

    state.store.upsert_cost_of_living(city, &prices).await?;

    Ok(Json(CostOfLivingResponse {
        city: city.to_string(),
        prices,
    }))
}
