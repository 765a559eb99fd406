//! Settings models for `.classroom-agents/config.toml`.
//!
//! This module defines the project-wide settings consumed at startup when
//! the orchestrator is bootstrapped, and the declarative agent files found
//! in `.classroom-agents/agents/*.yaml`.

use crate::agent_models::AgentCategory;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// Represents settings from `.classroom-agents/config.toml`.
///
/// # Example
///
/// ```toml
/// # .classroom-agents/config.toml
/// enabled_agents = ["curriculum-design", "grading-assistant"]
/// mock_latency_min_ms = 0
/// mock_latency_max_ms = 50
/// log_filter = "ca_core=debug"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Settings {
    /// Built-in agents to register at startup.
    ///
    /// When absent every built-in agent is registered.
    #[serde(default)]
    #[ts(optional)]
    pub enabled_agents: Option<Vec<String>>,

    /// Lower bound of the simulated latency applied by mock tools.
    #[serde(default = "default_latency_min")]
    pub mock_latency_min_ms: u64,

    /// Upper bound (inclusive) of the simulated latency applied by mock tools.
    #[serde(default = "default_latency_max")]
    pub mock_latency_max_ms: u64,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_latency_min() -> u64 {
    300
}

fn default_latency_max() -> u64 {
    500
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_agents: None,
            mock_latency_min_ms: default_latency_min(),
            mock_latency_max_ms: default_latency_max(),
            log_filter: default_log_filter(),
        }
    }
}

/// A mock agent declared in `.classroom-agents/agents/*.yaml`.
///
/// # Example
///
/// ```yaml
/// id: attendance
/// name: Attendance Tracker
/// category: teacher
/// tools:
///   - name: take_roll
///     description: Mark students present
///     response:
///       present: 24
///   - name: echo_roster
///     description: Returns the roster it was given
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct DeclaredAgent {
    /// Registry key. Must be non-empty.
    pub id: String,

    pub name: String,

    pub category: AgentCategory,

    #[serde(default)]
    pub tools: Vec<DeclaredTool>,
}

/// A tool of a [`DeclaredAgent`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct DeclaredTool {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Fixed value to return. When absent the tool echoes its payload.
    #[serde(default)]
    #[ts(optional)]
    pub response: Option<Value>,
}
