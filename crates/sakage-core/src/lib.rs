//! Domain types and configuration for the Sakage ordering backend.
//!
//! Holds the authoritative menu catalog (one copy, shared by suggestion
//! ranking and checkout pricing), currency handling in exact decimal
//! arithmetic, and env-based application configuration.

pub mod app_config;
pub mod config;
pub mod menu;
pub mod money;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use menu::{load_menu, MenuCatalog, MenuCategory, MenuError, MenuItem};
pub use money::{Money, MoneyError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
