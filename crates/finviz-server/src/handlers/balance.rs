use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use finviz_domain::{Transaction, TransactionKind};
use finviz_engine::{total_balance, Clock};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAdjustment {
    pub new_balance: f64,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AdjustOutcome {
    NoChange { message: String },
    Adjusted { transaction: Transaction },
}

/// Sets the total balance by recording a synthetic adjustment
/// transaction covering the difference.
pub async fn adjust(
    State(state): State<AppState>,
    Json(body): Json<BalanceAdjustment>,
) -> Result<(StatusCode, Json<AdjustOutcome>), ApiError> {
    let transactions = state.store.list_transactions()?;
    let delta = body.new_balance - total_balance(&transactions);

    if delta == 0.0 {
        return Ok((
            StatusCode::OK,
            Json(AdjustOutcome::NoChange {
                message: "Balance already matches".into(),
            }),
        ));
    }

    let kind = if delta > 0.0 {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };
    let transaction = state.store.insert_transaction(Transaction::new(
        "Balance Adjustment",
        delta.abs(),
        kind,
        "Adjustment",
        state.clock.now(),
    ))?;
    tracing::info!(delta, "balance adjusted");
    Ok((StatusCode::CREATED, Json(AdjustOutcome::Adjusted { transaction })))
}
