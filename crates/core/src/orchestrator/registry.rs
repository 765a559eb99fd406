//! Insertion-ordered id → agent map.

use crate::agents::Agent;
use std::collections::HashMap;
use std::sync::Arc;

/// Keys are unique. Iteration follows first-registration order;
/// replacing an existing id keeps its position.
#[derive(Debug, Default)]
pub(crate) struct AgentRegistry {
    order: Vec<String>,
    agents: HashMap<String, Arc<Agent>>,
}

impl AgentRegistry {
    /// Bind `agent` under its id, returning the binding it replaced.
    pub(crate) fn insert(&mut self, agent: Arc<Agent>) -> Option<Arc<Agent>> {
        let id = agent.id().to_string();
        let previous = self.agents.insert(id.clone(), agent);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Arc<Agent>> {
        let removed = self.agents.remove(id)?;
        self.order.retain(|key| key != id);
        Some(removed)
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Arc<Agent>> {
        self.agents.get(id)
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.agents.contains_key(id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Arc<Agent>> {
        self.order.iter().filter_map(|id| self.agents.get(id))
    }

    pub(crate) fn ids(&self) -> Vec<String> {
        self.order.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.agents.clear();
    }
}
