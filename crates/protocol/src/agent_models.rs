//! Agent classification and discovery descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

/// Closed classification tag for agents.
///
/// Categories group agents for listing and filtering only. They never
/// influence how a request is dispatched.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum AgentCategory {
    Teacher,
    Student,
    Analytics,
    Content,
    Assessment,
}

impl AgentCategory {
    /// Every category, in declaration order.
    pub const ALL: [AgentCategory; 5] = [
        AgentCategory::Teacher,
        AgentCategory::Student,
        AgentCategory::Analytics,
        AgentCategory::Content,
        AgentCategory::Assessment,
    ];

    /// The lowercase tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Analytics => "analytics",
            Self::Content => "content",
            Self::Assessment => "assessment",
        }
    }
}

impl fmt::Display for AgentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`AgentCategory`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown agent category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for AgentCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Summary of a registered agent, as returned by discovery operations.
///
/// # Example
///
/// ```json
/// {
///   "id": "curriculum-design",
///   "name": "Curriculum Designer",
///   "category": "teacher",
///   "toolNames": ["create_lesson_plan", "suggest_activities"],
///   "description": "Curriculum Designer (teacher)"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct AgentDescriptor {
    /// Registry key of the agent.
    pub id: String,

    /// Human-readable label.
    pub name: String,

    pub category: AgentCategory,

    /// Tool names in definition order.
    pub tool_names: Vec<String>,

    /// Presentational `"<name> (<category>)"` string.
    pub description: String,
}

impl AgentDescriptor {
    /// Build a descriptor, deriving `description` from name and category.
    pub fn new(id: &str, name: &str, category: AgentCategory, tool_names: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            tool_names,
            description: format!("{name} ({category})"),
        }
    }
}

/// One (agent, tool) pair from a flattened tool listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub agent_id: String,
    pub tool_name: String,
    pub description: String,
}
