use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use finviz_domain::{Transaction, TransactionKind, TransactionUpdate};
use finviz_engine::Clock;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Transaction>>, ApiError> {
    Ok(Json(state.store.list_transactions()?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let description = body
        .description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::Validation("Description is required".into()))?;
    let amount = body
        .amount
        .ok_or_else(|| ApiError::Validation("Amount is required".into()))?;
    if amount < 0.0 {
        return Err(ApiError::Validation("Amount must not be negative".into()));
    }

    let kind = body
        .kind
        .ok_or_else(|| ApiError::Validation("Type is required".into()))?;
    let category = body
        .category
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::Validation("Category is required".into()))?;
    let date = body.date.unwrap_or_else(|| state.clock.now());

    let txn = state
        .store
        .insert_transaction(Transaction::new(description, amount, kind, category, date))?;
    tracing::info!(id = %txn.id, kind = %txn.kind, "transaction created");
    Ok((StatusCode::CREATED, Json(txn)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<TransactionUpdate>,
) -> Result<Json<Transaction>, ApiError> {
    if matches!(body.amount, Some(amount) if amount < 0.0) {
        return Err(ApiError::Validation("Amount must not be negative".into()));
    }
    if matches!(&body.description, Some(text) if text.trim().is_empty()) {
        return Err(ApiError::Validation("Description must not be empty".into()));
    }
    Ok(Json(state.store.update_transaction(id, body)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_transaction(id)?;
    Ok(StatusCode::NO_CONTENT)
}
