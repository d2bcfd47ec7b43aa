use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/transactions",
            get(handlers::transactions::list).post(handlers::transactions::create),
        )
        .route(
            "/api/transactions/:id",
            put(handlers::transactions::update).delete(handlers::transactions::remove),
        )
        .route(
            "/api/savings-plans",
            get(handlers::savings_plans::list).post(handlers::savings_plans::create),
        )
        .route(
            "/api/savings-plans/:id",
            put(handlers::savings_plans::update).delete(handlers::savings_plans::remove),
        )
        .route(
            "/api/savings-plans/:id/contributions",
            post(handlers::savings_plans::contribute),
        )
        .route(
            "/api/spending-limits",
            get(handlers::spending_limits::list).post(handlers::spending_limits::upsert),
        )
        // GET takes a period name, PUT/DELETE take a record id.
        .route(
            "/api/spending-limits/:key",
            get(handlers::spending_limits::for_period)
                .put(handlers::spending_limits::update)
                .delete(handlers::spending_limits::remove),
        )
        .route("/api/balance/adjust", post(handlers::balance::adjust))
        .route("/api/search", get(handlers::search::search))
        .route("/api/dashboard", get(handlers::dashboard::dashboard))
}
