//! Agent record and the tool execution contract.

use crate::agents::tool::Tool;
use ca_protocol::{AgentCategory, AgentDescriptor, AgentRequest, AgentResponse};
use serde_json::Value;
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use tokio::task::JoinError;
use tokio::time::Instant;
use tracing::{debug, error};

/// Failures that can occur while an agent handles a request.
///
/// These never cross [`Agent::execute`]; they are rendered into the
/// `error` field of the response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Tool '{action}' not found on agent '{agent_id}'. Available tools: {available}")]
    ToolNotFound {
        action: String,
        agent_id: String,
        available: String,
    },
    #[error("{0}")]
    ToolFailed(String),
}

type ToolsetFactory = Box<dyn Fn() -> Vec<Tool> + Send + Sync>;

/// A named unit exposing a fixed set of tools.
///
/// Agents are plain records built once at startup. The tool list comes
/// from `define_tools`, which runs on first access and is memoized for
/// the agent's lifetime.
pub struct Agent {
    id: String,
    name: String,
    category: AgentCategory,
    define_tools: ToolsetFactory,
    tools: OnceLock<Vec<Tool>>,
}

impl Agent {
    /// Create an agent.
    ///
    /// # Arguments
    ///
    /// * `id` - Stable registry key, immutable for the agent's lifetime
    /// * `name` - Human-readable label
    /// * `category` - Grouping tag, does not affect dispatch
    /// * `define_tools` - Pure factory producing the tool set; invoked at most once
    pub fn new<F>(
        id: impl Into<String>,
        name: impl Into<String>,
        category: AgentCategory,
        define_tools: F,
    ) -> Self
    where
        F: Fn() -> Vec<Tool> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            define_tools: Box::new(define_tools),
            tools: OnceLock::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> AgentCategory {
        self.category
    }

    /// The agent's tools in definition order.
    pub fn tools(&self) -> &[Tool] {
        self.tools.get_or_init(|| (self.define_tools)())
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools().iter().map(|t| t.name().to_string()).collect()
    }

    /// First tool whose name equals `name`.
    pub fn find_tool(&self, name: &str) -> Option<&Tool> {
        self.tools().iter().find(|t| t.name() == name)
    }

    /// Tool names defined more than once. Only the first definition of each is reachable.
    pub fn duplicate_tool_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for name in self.tools().iter().map(Tool::name) {
            if !seen.insert(name) && !duplicates.iter().any(|d: &String| d == name) {
                duplicates.push(name.to_string());
            }
        }
        duplicates
    }

    pub fn descriptor(&self) -> AgentDescriptor {
        AgentDescriptor::new(&self.id, &self.name, self.category, self.tool_names())
    }

    /// Execute the tool named by `request.action`.
    ///
    /// Never fails: unknown tools, tool errors and tool panics are all
    /// reported as `success: false`. `duration` covers the whole call,
    /// including the lookup.
    ///
    /// The tool runs on its own task, so it completes even if this future
    /// is dropped before it resolves.
    pub async fn execute(&self, request: &AgentRequest) -> AgentResponse {
        let start = Instant::now();
        let outcome = self.run(request).await;
        let duration = elapsed_ms(start);

        match outcome {
            Ok(data) => AgentResponse::ok(data, duration),
            Err(err) => {
                match &err {
                    AgentError::ToolFailed(message) => {
                        error!(agent_id = %self.id, action = %request.action, "Tool failed: {message}");
                    }
                    AgentError::ToolNotFound { .. } => {
                        debug!(agent_id = %self.id, action = %request.action, "Unknown tool");
                    }
                }
                AgentResponse::fail(err.to_string(), duration)
            }
        }
    }

    async fn run(&self, request: &AgentRequest) -> Result<Value, AgentError> {
        let tool = self
            .find_tool(&request.action)
            .ok_or_else(|| AgentError::ToolNotFound {
                action: request.action.clone(),
                agent_id: self.id.clone(),
                available: list_or_none(&self.tool_names()),
            })?;

        let handler = tool.handler();
        let payload = request.payload.clone();
        let task = tokio::spawn(async move { handler.execute(payload).await });

        match task.await {
            Ok(Ok(data)) => Ok(data),
            Ok(Err(err)) => Err(AgentError::ToolFailed(describe_error(&err))),
            Err(join_err) => Err(AgentError::ToolFailed(describe_join_error(join_err))),
        }
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("tools", &self.tools.get())
            .finish_non_exhaustive()
    }
}

/// Comma-separated names, or `(none)` for an empty list.
pub(crate) fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn describe_error(err: &anyhow::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        format!("{err:#?}")
    } else {
        message
    }
}

fn describe_join_error(err: JoinError) -> String {
    if err.is_panic() {
        panic_message(err.into_panic())
    } else {
        "Tool task was cancelled".to_string()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "tool panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn echo_agent() -> Agent {
        Agent::new("echo", "Echo Agent", AgentCategory::Teacher, || {
            vec![
                Tool::from_fn("a", "first", |payload| async move { Ok(payload) }),
                Tool::from_fn("b", "second", |_| async move { Ok(json!("b")) }),
            ]
        })
    }

    #[test]
    fn test_tool_names_in_definition_order() {
        let agent = echo_agent();
        assert_eq!(agent.tool_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_define_tools_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let agent = Agent::new("lazy", "Lazy", AgentCategory::Student, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![Tool::from_fn("t", "t", |p| async move { Ok(p) })]
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let _ = agent.tools();
        let _ = agent.tool_names();
        let _ = agent.find_tool("t");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_find_tool() {
        let agent = echo_agent();
        assert_eq!(agent.find_tool("b").map(Tool::description), Some("second"));
        assert!(agent.find_tool("c").is_none());
    }

    #[test]
    fn test_find_tool_first_match_wins() {
        let agent = Agent::new("dup", "Dup", AgentCategory::Content, || {
            vec![
                Tool::from_fn("same", "first", |_| async move { Ok(json!(1)) }),
                Tool::from_fn("same", "second", |_| async move { Ok(json!(2)) }),
                Tool::from_fn("same", "third", |_| async move { Ok(json!(3)) }),
            ]
        });
        assert_eq!(agent.find_tool("same").map(Tool::description), Some("first"));
        assert_eq!(agent.duplicate_tool_names(), vec!["same"]);
    }

    #[test]
    fn test_descriptor() {
        let descriptor = echo_agent().descriptor();
        assert_eq!(descriptor.id, "echo");
        assert_eq!(descriptor.tool_names, vec!["a", "b"]);
        assert_eq!(descriptor.description, "Echo Agent (teacher)");
    }

    #[tokio::test]
    async fn test_execute_success() {
        let agent = echo_agent();
        let response = agent
            .execute(&AgentRequest::new("a", json!({"title": "X"})))
            .await;

        assert!(response.success);
        assert_eq!(response.data, Some(json!({"title": "X"})));
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_execute_unknown_tool_lists_available() {
        let agent = echo_agent();
        let response = agent.execute(&AgentRequest::new("c", json!({}))).await;

        assert!(!response.success);
        assert!(response.data.is_none());
        let error = response.error.unwrap();
        assert!(error.contains("not found"));
        assert!(error.contains("'c'"));
        assert!(error.contains("'echo'"));
        assert!(error.contains("a, b"));
    }

    #[tokio::test]
    async fn test_execute_unknown_tool_on_empty_agent() {
        let agent = Agent::new("empty", "Empty", AgentCategory::Analytics, Vec::new);
        let response = agent.execute(&AgentRequest::new("x", json!(null))).await;
        assert!(response.error.unwrap().ends_with("Available tools: (none)"));
    }

    #[tokio::test]
    async fn test_execute_tool_error_message() {
        let agent = Agent::new("failing", "Failing", AgentCategory::Assessment, || {
            vec![Tool::from_fn("boom", "fails", |_| async move {
                Err(anyhow::anyhow!("rubric missing"))
            })]
        });
        let response = agent.execute(&AgentRequest::new("boom", json!({}))).await;

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("rubric missing"));
    }

    #[tokio::test]
    async fn test_execute_tool_error_without_message_uses_debug() {
        #[derive(Debug)]
        struct Silent;
        impl fmt::Display for Silent {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                Ok(())
            }
        }
        impl std::error::Error for Silent {}

        let agent = Agent::new("silent", "Silent", AgentCategory::Assessment, || {
            vec![Tool::from_fn("quiet", "fails quietly", |_| async move {
                Err(anyhow::Error::new(Silent))
            })]
        });
        let response = agent.execute(&AgentRequest::new("quiet", json!({}))).await;

        assert!(!response.success);
        assert!(response.error.unwrap().contains("Silent"));
    }

    #[tokio::test]
    async fn test_execute_tool_panic_is_captured() {
        let agent = Agent::new("panicky", "Panicky", AgentCategory::Student, || {
            vec![Tool::from_fn("explode", "panics", |_| async move {
                if true {
                    panic!("chalk ran out");
                }
                Ok(json!(null))
            })]
        });
        let response = agent.execute(&AgentRequest::new("explode", json!({}))).await;

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("chalk ran out"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_duration_covers_tool_latency() {
        let agent = Agent::new("slow", "Slow", AgentCategory::Teacher, || {
            vec![Tool::from_fn("wait", "sleeps", |_| async move {
                tokio::time::sleep(std::time::Duration::from_millis(250)).await;
                Ok(json!("done"))
            })]
        });
        let response = agent.execute(&AgentRequest::new("wait", json!({}))).await;

        assert!(response.success);
        assert!(response.duration >= 250);
    }

    #[test]
    fn test_list_or_none() {
        assert_eq!(list_or_none(&[]), "(none)");
        assert_eq!(list_or_none(&["a".to_string(), "b".to_string()]), "a, b");
    }
}
