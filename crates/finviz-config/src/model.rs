use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server-side settings persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for record collections.
    /// Defaults to `~/Documents/Finviz`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            currency_symbol: Self::default_currency_symbol(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_listen_addr() -> String {
        "127.0.0.1:8000".into()
    }

    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Finviz")
    }
}
