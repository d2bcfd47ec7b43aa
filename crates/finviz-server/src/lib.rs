//! finviz-server
//!
//! HTTP surface over the record store and the aggregation engine.
//! Wires configuration, storage, and the axum router together.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use std::sync::{Arc, Once};

use finviz_config::{Config, ConfigManager};
use finviz_engine::SystemClock;
use finviz_store::JsonRecordStore;

use crate::error::ServerError;
use crate::state::AppState;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("finviz_server=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Loads configuration, opens the store, and serves the API until the
/// listener fails.
pub async fn run() -> Result<(), ServerError> {
    let manager = ConfigManager::with_base_dir(Config::default().resolve_data_root())?;
    let config = manager.load()?;
    if !manager.config_path().exists() {
        manager.save(&config)?;
    }

    let store = JsonRecordStore::new(config.resolve_data_root().join("records"))?;
    let state = AppState::new(
        Arc::new(store),
        Arc::new(SystemClock),
        config.currency_symbol.clone(),
    );
    let app = routes::api_routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "serving dashboard API");
    axum::serve(listener, app).await?;
    Ok(())
}
