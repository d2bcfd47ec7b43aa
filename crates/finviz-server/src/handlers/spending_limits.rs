use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use finviz_domain::{LimitPeriod, SpendingLimit, SpendingLimitUpdate, TOTAL_CATEGORY};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSpendingLimit {
    pub category: Option<String>,
    pub limit: Option<f64>,
    pub period: Option<LimitPeriod>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SpendingLimit>>, ApiError> {
    Ok(Json(state.store.list_spending_limits()?))
}

/// Returns the stored overall limit for the period, falling back to the
/// hardcoded default when none has been saved yet.
pub async fn for_period(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SpendingLimit>, ApiError> {
    let period =
        LimitPeriod::from_str(&key).map_err(|err| ApiError::Validation(err.to_string()))?;
    let limit = state
        .store
        .find_spending_limit(TOTAL_CATEGORY, period)?
        .unwrap_or_else(|| SpendingLimit::default_for(period));
    Ok(Json(limit))
}

pub async fn upsert(
    State(state): State<AppState>,
    Json(body): Json<UpsertSpendingLimit>,
) -> Result<(StatusCode, Json<SpendingLimit>), ApiError> {
    let amount = body
        .limit
        .filter(|amount| *amount > 0.0)
        .ok_or_else(|| ApiError::Validation("Limit must be greater than zero".into()))?;
    let period = body
        .period
        .ok_or_else(|| ApiError::Validation("Period is required".into()))?;
    let category = body
        .category
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::Validation("Category is required".into()))?;

    let limit = state.store.upsert_spending_limit(&category, amount, period)?;
    tracing::info!(category = %limit.category, period = %limit.period, "spending limit saved");
    Ok((StatusCode::CREATED, Json(limit)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SpendingLimitUpdate>,
) -> Result<Json<SpendingLimit>, ApiError> {
    if matches!(body.limit, Some(amount) if amount <= 0.0) {
        return Err(ApiError::Validation("Limit must be greater than zero".into()));
    }
    Ok(Json(state.store.update_spending_limit(id, body)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_spending_limit(id)?;
    Ok(StatusCode::NO_CONTENT)
}
