use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use finviz_domain::{LimitPeriod, SpendingLimit, TOTAL_CATEGORY};
use finviz_engine::{dashboard_view, ChartPeriod, Clock, DashboardView};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    pub period: Option<ChartPeriod>,
    pub limit_period: Option<LimitPeriod>,
}

/// One snapshot of everything the dashboard renders.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardView>, ApiError> {
    let chart_period = params.period.unwrap_or(ChartPeriod::Weekly);
    let limit_period = params.limit_period.unwrap_or(LimitPeriod::Weekly);

    let transactions = state.store.list_transactions()?;
    let plans = state.store.list_savings_plans()?;
    let limit = state
        .store
        .find_spending_limit(TOTAL_CATEGORY, limit_period)?
        .unwrap_or_else(|| SpendingLimit::default_for(limit_period));

    Ok(Json(dashboard_view(
        &transactions,
        &plans,
        &limit,
        chart_period,
        state.clock.now(),
    )))
}
