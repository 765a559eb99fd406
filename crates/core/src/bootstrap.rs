//! Startup wiring: build agents from configuration and register them.

use crate::agents::{Agent, AgentFactory, AgentKind, MockLatency};
use crate::config::AppConfig;
use crate::orchestrator::{default_orchestrator, Orchestrator};
use std::sync::Arc;
use tracing::{info, warn};

/// Build every agent `config` enables.
///
/// Built-in agents come first, in [`AgentKind::ALL`] order (or in
/// `enabled_agents` order when set), followed by declared agents. A
/// declared agent reusing a built-in id replaces it at registration.
pub fn build_agents(config: &AppConfig) -> Vec<Arc<Agent>> {
    let latency = MockLatency::from_settings(&config.settings);

    let kinds: Vec<AgentKind> = match &config.settings.enabled_agents {
        None => AgentKind::ALL.to_vec(),
        Some(ids) => ids
            .iter()
            .filter_map(|id| {
                let kind = AgentKind::from_id(id);
                if kind.is_none() {
                    warn!(agent_id = %id, "Skipping unknown built-in agent");
                }
                kind
            })
            .collect(),
    };

    kinds
        .into_iter()
        .map(|kind| AgentFactory::create(kind, latency))
        .chain(
            config
                .declared_agents
                .iter()
                .map(|declared| AgentFactory::create_declared(declared, latency)),
        )
        .collect()
}

/// A fresh orchestrator populated from `config`.
pub fn build_orchestrator(config: &AppConfig) -> Orchestrator {
    let orchestrator = Orchestrator::new();
    orchestrator.register_all(build_agents(config));
    orchestrator
}

/// Reset the process-wide orchestrator and populate it from `config`.
pub fn install_default(config: &AppConfig) -> &'static Orchestrator {
    let orchestrator = default_orchestrator();
    orchestrator.reset();
    orchestrator.register_all(build_agents(config));
    info!(agents = orchestrator.len(), "Default orchestrator ready");
    orchestrator
}
