//! The orchestrator: agent registry plus request routing.
//!
//! The `Orchestrator` is responsible for:
//! - Registering and unregistering agents by id
//! - Routing requests to the matching agent
//! - Discovery of agents and tools

use crate::agents::base::{elapsed_ms, list_or_none};
use crate::agents::Agent;
use crate::orchestrator::registry::AgentRegistry;
use ca_protocol::{
    AgentCategory, AgentDescriptor, AgentRequest, AgentResponse, OrchestratorRequest,
    OrchestratorResponse, ToolDescriptor, ORCHESTRATOR_ID,
};
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Failures raised while routing, before any agent is involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Agent '{agent_id}' not found. Available agents: {available}")]
    AgentNotFound { agent_id: String, available: String },
}

/// Holds the live agents and dispatches requests to them by id.
///
/// All methods take `&self`, so one instance can be shared behind an
/// `Arc` or used through [`default_orchestrator`](crate::orchestrator::default_orchestrator).
/// The registry lock is never held while a tool runs.
#[derive(Debug, Default)]
pub struct Orchestrator {
    registry: RwLock<AgentRegistry>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under its id.
    ///
    /// An existing binding for the same id is replaced and a warning is
    /// logged. Duplicate tool names inside the agent are logged too; the
    /// first definition stays reachable.
    pub fn register(&self, agent: Arc<Agent>) {
        let duplicates = agent.duplicate_tool_names();
        if !duplicates.is_empty() {
            warn!(
                agent_id = agent.id(),
                "Agent defines duplicate tools, only the first of each is reachable: {}",
                duplicates.join(", ")
            );
        }

        let agent_id = agent.id().to_string();
        let previous = self.registry.write().insert(agent);
        if previous.is_some() {
            warn!(agent_id = %agent_id, "Agent already registered, replacing previous binding");
        } else {
            debug!(agent_id = %agent_id, "Registered agent");
        }
    }

    /// Register each agent in order.
    pub fn register_all<I>(&self, agents: I)
    where
        I: IntoIterator<Item = Arc<Agent>>,
    {
        for agent in agents {
            self.register(agent);
        }
    }

    /// Remove the agent bound to `agent_id`.
    ///
    /// # Returns
    ///
    /// `true` if an agent was removed, `false` if none was registered.
    pub fn unregister(&self, agent_id: &str) -> bool {
        let removed = self.registry.write().remove(agent_id).is_some();
        if removed {
            debug!(agent_id, "Unregistered agent");
        }
        removed
    }

    /// Route `request` to the agent bound to `agent_id`.
    ///
    /// # Returns
    ///
    /// Always a response. When the agent is missing, `handled_by` is
    /// [`ORCHESTRATOR_ID`] and the error lists the registered ids.
    /// Otherwise the agent's response is returned with its own duration
    /// and `handled_by` set to `agent_id`.
    pub async fn route(&self, agent_id: &str, request: &AgentRequest) -> OrchestratorResponse {
        let start = Instant::now();

        let Some(agent) = self.get_agent(agent_id) else {
            let err = RoutingError::AgentNotFound {
                agent_id: agent_id.to_string(),
                available: list_or_none(&self.list_agent_ids()),
            };
            debug!(agent_id, action = %request.action, "{err}");
            return OrchestratorResponse::new(
                AgentResponse::fail(err.to_string(), elapsed_ms(start)),
                ORCHESTRATOR_ID,
            );
        };

        debug!(agent_id, action = %request.action, "Routing request");
        let response = agent.execute(request).await;
        OrchestratorResponse::new(response, agent_id)
    }

    /// Same as [`route`](Self::route) with the target taken from the request.
    pub async fn dispatch(&self, request: &OrchestratorRequest) -> OrchestratorResponse {
        self.route(&request.target_agent, &request.request).await
    }

    pub fn get_agent(&self, agent_id: &str) -> Option<Arc<Agent>> {
        self.registry.read().get(agent_id).cloned()
    }

    pub fn has_agent(&self, agent_id: &str) -> bool {
        self.registry.read().contains(agent_id)
    }

    /// Registered ids in registration order.
    pub fn list_agent_ids(&self) -> Vec<String> {
        self.registry.read().ids()
    }

    /// Descriptors of every registered agent, in registration order.
    pub fn list_agents(&self) -> Vec<AgentDescriptor> {
        self.registry.read().iter().map(|a| a.descriptor()).collect()
    }

    pub fn list_agents_by_category(&self, category: AgentCategory) -> Vec<AgentDescriptor> {
        self.list_agents()
            .into_iter()
            .filter(|descriptor| descriptor.category == category)
            .collect()
    }

    /// First agent, in registration order, that exposes `tool_name`.
    pub fn find_agent_by_tool(&self, tool_name: &str) -> Option<Arc<Agent>> {
        self.registry
            .read()
            .iter()
            .find(|agent| agent.find_tool(tool_name).is_some())
            .cloned()
    }

    /// Every (agent, tool) pair, agents in registration order and tools in
    /// definition order.
    pub fn list_all_tools(&self) -> Vec<ToolDescriptor> {
        self.registry
            .read()
            .iter()
            .flat_map(|agent| {
                agent.tools().iter().map(move |tool| ToolDescriptor {
                    agent_id: agent.id().to_string(),
                    tool_name: tool.name().to_string(),
                    description: tool.description().to_string(),
                })
            })
            .collect()
    }

    /// Drop every registration. The agents themselves stay usable.
    pub fn reset(&self) {
        let mut registry = self.registry.write();
        let cleared = registry.len();
        registry.clear();
        info!(cleared, "Orchestrator reset");
    }

    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
