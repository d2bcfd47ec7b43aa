use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finviz_domain::{
    SavingsCategory, SavingsPlan, SavingsPlanUpdate, Transaction, TransactionKind,
};
use finviz_engine::Clock;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsPlan {
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    #[serde(default)]
    pub category: SavingsCategory,
    pub icon: Option<String>,
    pub icon_bg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Contribution {
    pub amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionOutcome {
    pub plan: SavingsPlan,
    pub transaction: Transaction,
}

#[derive(Debug, Serialize)]
pub struct DeleteMessage {
    pub message: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SavingsPlan>>, ApiError> {
    Ok(Json(state.store.list_savings_plans()?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewSavingsPlan>,
) -> Result<(StatusCode, Json<SavingsPlan>), ApiError> {
    let name = body
        .name
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::Validation("Name is required".into()))?;
    let target = body
        .target_amount
        .filter(|amount| *amount > 0.0)
        .ok_or_else(|| ApiError::Validation("Target amount must be greater than zero".into()))?;
    if matches!(body.current_amount, Some(amount) if amount < 0.0) {
        return Err(ApiError::Validation(
            "Current amount must not be negative".into(),
        ));
    }

    let mut plan = SavingsPlan::new(name, target, body.category);
    if let Some(current) = body.current_amount {
        plan.current_amount = current;
    }
    if let Some(icon) = body.icon {
        plan.icon = icon;
    }
    if let Some(icon_bg) = body.icon_bg {
        plan.icon_bg = icon_bg;
    }

    let plan = state.store.insert_savings_plan(plan)?;
    tracing::info!(id = %plan.id, "savings plan created");
    Ok((StatusCode::CREATED, Json(plan)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SavingsPlanUpdate>,
) -> Result<Json<SavingsPlan>, ApiError> {
    if matches!(&body.name, Some(text) if text.trim().is_empty()) {
        return Err(ApiError::Validation("Name must not be empty".into()));
    }
    if matches!(body.target_amount, Some(target) if target <= 0.0) {
        return Err(ApiError::Validation(
            "Target amount must be greater than zero".into(),
        ));
    }
    Ok(Json(state.store.update_savings_plan(id, body)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteMessage>, ApiError> {
    state.store.delete_savings_plan(id)?;
    Ok(Json(DeleteMessage {
        message: "Savings plan deleted".into(),
    }))
}

/// Adds money to a plan: the plan balance is bumped first, then a
/// companion expense transaction is recorded. When the second step fails
/// the bump is not rolled back and the failure is reported distinctly.
pub async fn contribute(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Contribution>,
) -> Result<(StatusCode, Json<ContributionOutcome>), ApiError> {
    if body.amount <= 0.0 {
        return Err(ApiError::Validation(
            "Contribution amount must be greater than zero".into(),
        ));
    }

    let current = state.store.get_savings_plan(id)?;
    let plan = state.store.update_savings_plan(
        id,
        SavingsPlanUpdate {
            current_amount: Some(current.current_amount + body.amount),
            ..Default::default()
        },
    )?;

    let txn = Transaction::new(
        format!("Savings: {}", plan.name),
        body.amount,
        TransactionKind::Expense,
        "Savings",
        state.clock.now(),
    );
    let transaction = state
        .store
        .insert_transaction(txn)
        .map_err(ApiError::PartialContribution)?;

    tracing::info!(plan = %plan.id, amount = body.amount, "contribution recorded");
    Ok((StatusCode::CREATED, Json(ContributionOutcome { plan, transaction })))
}
