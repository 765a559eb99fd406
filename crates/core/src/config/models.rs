//! Configuration models that aggregate all settings.

use ca_protocol::config_models::{DeclaredAgent, Settings};

/// Unified configuration loaded from the `.classroom-agents/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Settings
/// - `agents/*.yaml`: Declared mock agents
///
/// # Example
///
/// ```rust,no_run
/// use ca_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("Loaded {} declared agents", config.declared_agents.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Settings from `config.toml`.
    pub settings: Settings,

    /// Agents declared in `agents/*.yaml`, sorted by file name.
    pub declared_agents: Vec<DeclaredAgent>,
}
