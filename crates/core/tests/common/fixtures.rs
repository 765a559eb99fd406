//! Test fixtures for building agents, orchestrators and config directories.

use ca_core::agents::{mock_failing_tool, Agent, AgentFactory, AgentKind, MockLatency, Tool};
use ca_core::orchestrator::Orchestrator;
use ca_protocol::AgentCategory;
use std::sync::Arc;
use tempfile::TempDir;

/// An agent whose tools echo their payload back.
#[allow(dead_code)]
pub fn echo_agent(id: &str, category: AgentCategory, tools: &[&str]) -> Arc<Agent> {
    let names: Vec<String> = tools.iter().map(|t| t.to_string()).collect();
    Arc::new(Agent::new(id, format!("{id} agent"), category, move || {
        names
            .iter()
            .map(|name| {
                Tool::from_fn(name.as_str(), format!("{name} (echo)"), |payload| async move {
                    Ok(payload)
                })
            })
            .collect()
    }))
}

/// An agent with one working and one failing tool.
#[allow(dead_code)]
pub fn flaky_agent(id: &str) -> Arc<Agent> {
    Arc::new(Agent::new(id, "Flaky", AgentCategory::Assessment, || {
        vec![
            Tool::from_fn("ok", "works", |payload| async move { Ok(payload) }),
            mock_failing_tool("broken", "always fails", MockLatency::none(), "grading service offline"),
        ]
    }))
}

/// An orchestrator holding every built-in agent with no simulated latency.
#[allow(dead_code)]
pub fn builtin_orchestrator() -> Orchestrator {
    let orchestrator = Orchestrator::new();
    orchestrator.register_all(AgentFactory::create_all(MockLatency::none()));
    orchestrator
}

#[allow(dead_code)]
pub fn builtin(kind: AgentKind) -> Arc<Agent> {
    AgentFactory::create(kind, MockLatency::none())
}

/// Create a temporary project with a `.classroom-agents/` directory.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(config_toml: &str, agents: &[(&str, &str)]) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let config_dir = temp_dir.path().join(".classroom-agents");

    std::fs::create_dir_all(config_dir.join("agents"))?;
    std::fs::write(config_dir.join("config.toml"), config_toml)?;

    for (file_name, yaml) in agents {
        std::fs::write(config_dir.join("agents").join(file_name), yaml)?;
    }

    Ok(temp_dir)
}
