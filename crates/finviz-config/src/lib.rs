//! finviz-config
//!
//! Server configuration model plus disk persistence helpers.
//! Owns the Config data structure and its JSON file on disk.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
