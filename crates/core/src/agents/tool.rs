//! Tool abstraction: a named, described asynchronous operation.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// The executable half of a [`Tool`].
///
/// Handlers receive the request payload and either produce an output
/// value or fail with an error. They may suspend (I/O, simulated latency).
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn execute(&self, payload: Value) -> anyhow::Result<Value>;
}

/// Adapts an async closure into a [`ToolHandler`].
pub struct FnTool<F>(F);

#[async_trait]
impl<F, Fut> ToolHandler for FnTool<F>
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
{
    async fn execute(&self, payload: Value) -> anyhow::Result<Value> {
        (self.0)(payload).await
    }
}

/// A named operation exposed by an agent.
///
/// `name` is unique within its owning agent and is the dispatch key
/// matched against `AgentRequest::action`. Cloning is cheap.
#[derive(Clone)]
pub struct Tool {
    name: String,
    description: String,
    handler: Arc<dyn ToolHandler>,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Arc::new(handler),
        }
    }

    /// Build a tool from an async closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ca_core::agents::Tool;
    ///
    /// let tool = Tool::from_fn("echo", "Returns its input", |payload| async move { Ok(payload) });
    /// assert_eq!(tool.name(), "echo");
    /// ```
    pub fn from_fn<F, Fut>(name: impl Into<String>, description: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        Self::new(name, description, FnTool(f))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the handler directly, without the agent's response envelope.
    pub async fn execute(&self, payload: Value) -> anyhow::Result<Value> {
        self.handler.execute(payload).await
    }

    pub(crate) fn handler(&self) -> Arc<dyn ToolHandler> {
        Arc::clone(&self.handler)
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
