//! Configuration file loader for the `.classroom-agents/` directory.
//!
//! This module loads and validates:
//! - `config.toml`: Settings
//! - `agents/*.yaml` / `agents/*.yml`: Declared mock agents

use crate::agents::AgentKind;
use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use ca_protocol::config_models::{DeclaredAgent, Settings};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the configuration directory under the project root.
pub const CONFIG_DIR: &str = ".classroom-agents";

/// Loads all configuration from the `.classroom-agents/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.classroom-agents/` folder
///
/// # Returns
///
/// An `AppConfig` with everything that was found. Missing directories or
/// files yield defaults rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid TOML or YAML syntax
/// - `enabled_agents` names an unknown built-in agent
/// - The mock latency range is inverted
/// - A declared agent has an empty id, an empty tool name, or reuses the
///   id of another declared agent
pub fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let config_dir = root.join(CONFIG_DIR);

    if !config_dir.exists() {
        return Ok(AppConfig::default());
    }

    let settings = load_settings(&config_dir)?;
    let declared_agents = load_declared_agents(&config_dir)?;

    Ok(AppConfig {
        settings,
        declared_agents,
    })
}

/// Loads and validates `config.toml`.
fn load_settings(config_dir: &Path) -> ConfigResult<Settings> {
    let config_path = config_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(Settings::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let settings: Settings =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    if settings.mock_latency_min_ms > settings.mock_latency_max_ms {
        return Err(ConfigError::InvalidConfig {
            path: config_path,
            reason: format!(
                "mock_latency_min_ms ({}) is greater than mock_latency_max_ms ({})",
                settings.mock_latency_min_ms, settings.mock_latency_max_ms
            ),
        });
    }

    if let Some(enabled) = &settings.enabled_agents {
        if let Some(unknown) = enabled.iter().find(|id| AgentKind::from_id(id).is_none()) {
            let known: Vec<&str> = AgentKind::ALL.iter().map(AgentKind::id).collect();
            return Err(ConfigError::InvalidConfig {
                path: config_path,
                reason: format!(
                    "unknown agent '{unknown}' in enabled_agents (known: {})",
                    known.join(", ")
                ),
            });
        }
    }

    Ok(settings)
}

/// Loads all agent declarations from `agents/`, sorted by file name.
fn load_declared_agents(config_dir: &Path) -> ConfigResult<Vec<DeclaredAgent>> {
    let agents_dir = config_dir.join("agents");

    if !agents_dir.exists() {
        return Ok(Vec::new());
    }

    let mut agents = Vec::new();
    let mut seen_ids = HashSet::new();

    for entry in WalkDir::new(&agents_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: agents_dir.clone(),
            source,
        })?;

        let path = entry.path();

        let ext = path.extension().and_then(|s| s.to_str());
        if ext != Some("yaml") && ext != Some("yml") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let agent: DeclaredAgent =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;

        let invalid = |reason: String| ConfigError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        };

        if agent.id.trim().is_empty() {
            return Err(invalid("agent id must not be empty".to_string()));
        }
        if agent.tools.iter().any(|tool| tool.name.trim().is_empty()) {
            return Err(invalid(format!("agent '{}' has a tool with an empty name", agent.id)));
        }
        if !seen_ids.insert(agent.id.clone()) {
            return Err(invalid(format!("agent '{}' is declared more than once", agent.id)));
        }

        agents.push(agent);
    }

    Ok(agents)
}
