use std::sync::Arc;

use finviz_engine::Clock;
use finviz_store::JsonRecordStore;

/// Shared context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonRecordStore>,
    pub clock: Arc<dyn Clock>,
    pub currency_symbol: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<JsonRecordStore>,
        clock: Arc<dyn Clock>,
        currency_symbol: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            store,
            clock,
            currency_symbol: currency_symbol.into(),
        }
    }
}
