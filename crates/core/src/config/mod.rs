//! Configuration loading and management.
//!
//! This module provides functionality to load, parse and validate the
//! configuration files in the `.classroom-agents/` directory.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, CONFIG_DIR};
pub use models::AppConfig;
