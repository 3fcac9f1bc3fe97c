//! pocket-config
//!
//! Persistent user preferences and configuration model.
//! Owns the Config data structure, data directory resolution and disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;
pub mod paths;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
