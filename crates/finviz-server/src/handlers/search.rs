use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finviz_engine::search::{search as run_search, SearchHit};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: SearchResultKind,
    pub display_text: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Transaction,
    Plan,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub performed: bool,
    pub results: Vec<SearchResult>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let transactions = state.store.list_transactions()?;
    let plans = state.store.list_savings_plans()?;

    let Some(hits) = run_search(&params.q, &transactions, &plans) else {
        return Ok(Json(SearchResponse {
            performed: false,
            results: Vec::new(),
        }));
    };

    let symbol = &state.currency_symbol;
    let results = hits
        .into_iter()
        .map(|hit| match hit {
            SearchHit::Transaction(txn) => SearchResult {
                id: txn.id,
                kind: SearchResultKind::Transaction,
                display_text: format!("{} ({}{})", txn.description, symbol, txn.amount),
            },
            SearchHit::Plan(plan) => SearchResult {
                id: plan.id,
                kind: SearchResultKind::Plan,
                display_text: format!(
                    "{} ({}{}/{}{})",
                    plan.name, symbol, plan.current_amount, symbol, plan.target_amount
                ),
            },
        })
        .collect();

    Ok(Json(SearchResponse {
        performed: true,
        results,
    }))
}
