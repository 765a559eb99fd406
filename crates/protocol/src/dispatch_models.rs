//! Request and response envelopes for agent dispatch.
//!
//! Every call into an agent or the orchestrator produces exactly one
//! response envelope. Failures are never raised as errors across the
//! boundary; they are reported through `success: false` plus a message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Identity reported in `handledBy` when no agent processed the request.
pub const ORCHESTRATOR_ID: &str = "orchestrator";

/// A request addressed to one tool of an agent.
///
/// # Example
///
/// ```json
/// { "action": "create_lesson_plan", "payload": { "title": "Fractions" } }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct AgentRequest {
    /// Name of the tool to invoke.
    pub action: String,

    /// Tool-specific input. Defaults to `null` when omitted.
    #[serde(default)]
    pub payload: Value,
}

impl AgentRequest {
    pub fn new(action: impl Into<String>, payload: Value) -> Self {
        Self {
            action: action.into(),
            payload,
        }
    }
}

/// Normalized outcome of executing a request.
///
/// `data` is present iff `success` is true and `error` is present iff it
/// is false. `duration` is always present, in wall-clock milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct AgentResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,

    /// Milliseconds spent inside `execute`.
    pub duration: u64,
}

impl AgentResponse {
    /// Successful response carrying `data`.
    pub fn ok(data: Value, duration: u64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            duration,
        }
    }

    /// Failed response carrying a human-readable `error`.
    pub fn fail(error: impl Into<String>, duration: u64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            duration,
        }
    }
}

/// Convenience form of a routed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorRequest {
    /// Id of the agent that should handle `request`.
    pub target_agent: String,
    pub request: AgentRequest,
}

impl OrchestratorRequest {
    pub fn new(target_agent: impl Into<String>, request: AgentRequest) -> Self {
        Self {
            target_agent: target_agent.into(),
            request,
        }
    }
}

/// An [`AgentResponse`] stamped with the identity that handled it.
///
/// Serializes flat:
///
/// ```json
/// { "success": true, "data": {}, "duration": 312, "handledBy": "curriculum-design" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorResponse {
    #[serde(flatten)]
    pub response: AgentResponse,

    /// Agent id, or [`ORCHESTRATOR_ID`] when no agent was found.
    pub handled_by: String,
}

impl OrchestratorResponse {
    pub fn new(response: AgentResponse, handled_by: impl Into<String>) -> Self {
        Self {
            response,
            handled_by: handled_by.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.response.success
    }

    pub fn data(&self) -> Option<&Value> {
        self.response.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.response.error.as_deref()
    }

    pub fn duration(&self) -> u64 {
        self.response.duration
    }
}
