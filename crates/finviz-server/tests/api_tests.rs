use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{TimeZone, Utc};
use tempfile::{tempdir, TempDir};

use finviz_domain::{LimitPeriod, SavingsCategory, Transaction, TransactionKind};
use finviz_engine::{Clock, FixedClock};
use finviz_server::error::ApiError;
use finviz_server::handlers::{
    balance, dashboard, savings_plans, search, spending_limits, transactions,
};
use finviz_server::state::AppState;
use finviz_store::JsonRecordStore;

fn state() -> (TempDir, AppState) {
    let dir = tempdir().expect("tempdir");
    let store = JsonRecordStore::new(dir.path().join("records")).expect("store");
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 20, 14, 0, 0).unwrap());
    let state = AppState::new(Arc::new(store), Arc::new(clock), "₹".to_string());
    (dir, state)
}

fn new_transaction(description: &str, amount: f64) -> transactions::NewTransaction {
    serde_json::from_value(serde_json::json!({
        "description": description,
        "amount": amount,
        "type": "expense",
        "category": "Food",
    }))
    .expect("payload")
}

#[tokio::test]
async fn transaction_create_rejects_blank_description() {
    let (_dir, state) = state();
    let err = transactions::create(State(state), Json(new_transaction("   ", 10.0)))
        .await
        .expect_err("blank description");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transaction_create_requires_type_and_category() {
    let (_dir, state) = state();

    let missing_type = serde_json::from_value(serde_json::json!({
        "description": "Lunch",
        "amount": 10.0,
        "category": "Food",
    }))
    .expect("payload");
    let err = transactions::create(State(state.clone()), Json(missing_type))
        .await
        .expect_err("missing type");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let missing_category = serde_json::from_value(serde_json::json!({
        "description": "Lunch",
        "amount": 10.0,
        "type": "expense",
    }))
    .expect("payload");
    let err = transactions::create(State(state.clone()), Json(missing_category))
        .await
        .expect_err("missing category");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let listed = transactions::list(State(state)).await.expect("list");
    assert!(listed.0.is_empty());
}

#[tokio::test]
async fn transaction_create_defaults_date_to_the_clock() {
    let (_dir, state) = state();
    let (status, Json(txn)) =
        transactions::create(State(state.clone()), Json(new_transaction("Lunch", 12.5)))
            .await
            .expect("create");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(txn.date, state.clock.now());

    let Json(listed) = transactions::list(State(state)).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "Lunch");
}

#[tokio::test]
async fn transaction_update_of_missing_record_is_404() {
    let (_dir, state) = state();
    let err = transactions::update(
        State(state),
        Path(uuid::Uuid::new_v4()),
        Json(Default::default()),
    )
    .await
    .expect_err("missing");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn transaction_delete_is_idempotent() {
    let (_dir, state) = state();
    let status = transactions::remove(State(state), Path(uuid::Uuid::new_v4()))
        .await
        .expect("idempotent");
    assert_eq!(status, StatusCode::NO_CONTENT);
}

fn new_plan(name: &str, target: f64) -> savings_plans::NewSavingsPlan {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "targetAmount": target,
        "category": "Vacation",
    }))
    .expect("payload")
}

#[tokio::test]
async fn savings_plan_create_fills_icon_from_category() {
    let (_dir, state) = state();
    let (status, Json(plan)) = savings_plans::create(State(state), Json(new_plan("Trip", 5000.0)))
        .await
        .expect("create");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(plan.category, SavingsCategory::Vacation);
    assert_eq!(plan.icon, SavingsCategory::Vacation.icon());
    assert_eq!(plan.current_amount, 0.0);
}

#[tokio::test]
async fn savings_plan_create_seeds_the_starting_amount() {
    let (_dir, state) = state();
    let payload = serde_json::from_value(serde_json::json!({
        "name": "Trip",
        "targetAmount": 1000.0,
        "currentAmount": 250.0,
        "category": "Vacation",
    }))
    .expect("payload");
    let (_, Json(plan)) = savings_plans::create(State(state.clone()), Json(payload))
        .await
        .expect("create");
    assert_eq!(plan.current_amount, 250.0);

    let stored = state.store.get_savings_plan(plan.id).expect("stored");
    assert_eq!(stored.current_amount, 250.0);
}

#[tokio::test]
async fn savings_plan_create_rejects_a_negative_starting_amount() {
    let (_dir, state) = state();
    let payload = serde_json::from_value(serde_json::json!({
        "name": "Trip",
        "targetAmount": 1000.0,
        "currentAmount": -1.0,
    }))
    .expect("payload");
    let err = savings_plans::create(State(state), Json(payload))
        .await
        .expect_err("negative start");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn savings_plan_create_rejects_non_positive_target() {
    let (_dir, state) = state();
    let err = savings_plans::create(State(state), Json(new_plan("Trip", 0.0)))
        .await
        .expect_err("zero target");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn savings_plan_delete_reports_missing_records() {
    let (_dir, state) = state();
    let (_, Json(plan)) = savings_plans::create(State(state.clone()), Json(new_plan("Trip", 100.0)))
        .await
        .expect("create");

    let Json(message) = savings_plans::remove(State(state.clone()), Path(plan.id))
        .await
        .expect("delete");
    assert_eq!(message.message, "Savings plan deleted");

    let err = savings_plans::remove(State(state), Path(plan.id))
        .await
        .expect_err("already gone");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contributions_accumulate_and_record_expense_transactions() {
    let (_dir, state) = state();
    let (_, Json(plan)) =
        savings_plans::create(State(state.clone()), Json(new_plan("New Laptop", 1000.0)))
            .await
            .expect("create");

    for amount in [300.0, 800.0] {
        let (status, Json(outcome)) = savings_plans::contribute(
            State(state.clone()),
            Path(plan.id),
            Json(savings_plans::Contribution { amount }),
        )
        .await
        .expect("contribute");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(outcome.transaction.kind, TransactionKind::Expense);
        assert_eq!(outcome.transaction.category, "Savings");
        assert_eq!(outcome.transaction.description, "Savings: New Laptop");
    }

    let stored = state.store.get_savings_plan(plan.id).expect("plan");
    assert_eq!(stored.current_amount, 1100.0);

    // Overfunding shows as zero remaining on screen, negative raw.
    let progress = finviz_engine::plan_progress(&stored);
    assert_eq!(progress.display_remaining, 0.0);
    assert_eq!(progress.raw_remaining, -100.0);

    let listed = transactions::list(State(state)).await.expect("list");
    assert_eq!(listed.0.len(), 2);
}

#[tokio::test]
async fn contribution_amount_must_be_positive() {
    let (_dir, state) = state();
    let (_, Json(plan)) = savings_plans::create(State(state.clone()), Json(new_plan("Car", 900.0)))
        .await
        .expect("create");

    let err = savings_plans::contribute(
        State(state),
        Path(plan.id),
        Json(savings_plans::Contribution { amount: 0.0 }),
    )
    .await
    .expect_err("zero amount");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

fn upsert_payload(limit: f64, period: &str) -> spending_limits::UpsertSpendingLimit {
    serde_json::from_value(
        serde_json::json!({ "category": "Total", "limit": limit, "period": period }),
    )
    .expect("payload")
}

#[tokio::test]
async fn spending_limit_get_falls_back_to_the_default() {
    let (_dir, state) = state();
    let Json(limit) = spending_limits::for_period(State(state), Path("weekly".into()))
        .await
        .expect("default");
    assert_eq!(limit.limit, LimitPeriod::Weekly.default_limit());
    assert_eq!(limit.category, "Total");
}

#[tokio::test]
async fn spending_limit_get_rejects_unknown_periods() {
    let (_dir, state) = state();
    let err = spending_limits::for_period(State(state), Path("fortnightly".into()))
        .await
        .expect_err("unknown period");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn spending_limit_upsert_requires_every_field() {
    let (_dir, state) = state();
    let payload = serde_json::from_value(serde_json::json!({
        "limit": 4000.0,
        "period": "weekly",
    }))
    .expect("payload");
    let err = spending_limits::upsert(State(state.clone()), Json(payload))
        .await
        .expect_err("missing category");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let Json(all) = spending_limits::list(State(state)).await.expect("list");
    assert!(all.is_empty());
}

#[tokio::test]
async fn spending_limit_upsert_replaces_rather_than_duplicates() {
    let (_dir, state) = state();
    spending_limits::upsert(State(state.clone()), Json(upsert_payload(4000.0, "weekly")))
        .await
        .expect("first");
    let (status, Json(second)) =
        spending_limits::upsert(State(state.clone()), Json(upsert_payload(5000.0, "weekly")))
            .await
            .expect("second");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second.limit, 5000.0);

    let Json(all) = spending_limits::list(State(state)).await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].limit, 5000.0);
}

#[tokio::test]
async fn balance_adjustment_records_the_delta_as_income() {
    let (_dir, state) = state();
    state
        .store
        .insert_transaction(Transaction::new(
            "Salary",
            1000.0,
            TransactionKind::Income,
            "Work",
            state.clock.now(),
        ))
        .expect("seed");

    let (status, Json(outcome)) = balance::adjust(
        State(state.clone()),
        Json(serde_json::from_value(serde_json::json!({ "newBalance": 1500.0 })).unwrap()),
    )
    .await
    .expect("adjust");
    assert_eq!(status, StatusCode::CREATED);
    match outcome {
        balance::AdjustOutcome::Adjusted { transaction } => {
            assert_eq!(transaction.amount, 500.0);
            assert_eq!(transaction.kind, TransactionKind::Income);
            assert_eq!(transaction.category, "Adjustment");
            assert_eq!(transaction.description, "Balance Adjustment");
        }
        other => panic!("expected adjustment, got {other:?}"),
    }

    // A second adjustment to the same figure is a no-op.
    let (status, Json(outcome)) = balance::adjust(
        State(state),
        Json(serde_json::from_value(serde_json::json!({ "newBalance": 1500.0 })).unwrap()),
    )
    .await
    .expect("no-op");
    assert_eq!(status, StatusCode::OK);
    assert!(matches!(outcome, balance::AdjustOutcome::NoChange { .. }));
}

#[tokio::test]
async fn short_queries_do_not_count_as_a_search() {
    let (_dir, state) = state();
    let Json(response) = search::search(
        State(state),
        Query(serde_json::from_value(serde_json::json!({ "q": "a" })).unwrap()),
    )
    .await
    .expect("search");
    assert!(!response.performed);
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn search_formats_hits_with_the_currency_symbol() {
    let (_dir, state) = state();
    state
        .store
        .insert_transaction(Transaction::new(
            "Coffee beans",
            250.0,
            TransactionKind::Expense,
            "Food",
            state.clock.now(),
        ))
        .expect("seed");

    let Json(response) = search::search(
        State(state),
        Query(serde_json::from_value(serde_json::json!({ "q": "coffee" })).unwrap()),
    )
    .await
    .expect("search");
    assert!(response.performed);
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].display_text, "Coffee beans (₹250)");
}

#[tokio::test]
async fn dashboard_defaults_to_the_weekly_views() {
    let (_dir, state) = state();
    state
        .store
        .insert_transaction(Transaction::new(
            "Salary",
            2000.0,
            TransactionKind::Income,
            "Work",
            state.clock.now(),
        ))
        .expect("seed");
    state
        .store
        .insert_transaction(Transaction::new(
            "Groceries",
            300.0,
            TransactionKind::Expense,
            "Food",
            state.clock.now(),
        ))
        .expect("seed");

    let Json(view) = dashboard::dashboard(
        State(state),
        Query(serde_json::from_value(serde_json::json!({})).unwrap()),
    )
    .await
    .expect("dashboard");

    assert_eq!(view.chart_period, finviz_engine::ChartPeriod::Weekly);
    assert_eq!(view.balance.balance, 1700.0);
    assert_eq!(view.spending.limit, LimitPeriod::Weekly.default_limit());
    assert_eq!(view.spending.spent, 300.0);
    assert_eq!(view.chart_total, 300.0);
}

#[tokio::test]
async fn store_errors_map_to_not_found_responses() {
    let err = ApiError::from(finviz_store::StoreError::SavingsPlanNotFound(
        uuid::Uuid::new_v4(),
    ));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}
