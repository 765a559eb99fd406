//! Mock tools with simulated latency.
//!
//! Agents without a real backend expose tools built here. Each call waits
//! for a random delay and then returns a fixed value, the payload itself,
//! or a function of the payload.

use crate::agents::tool::{Tool, ToolHandler};
use async_trait::async_trait;
use ca_protocol::Settings;
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Inclusive range of simulated latency, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            min_ms: 300,
            max_ms: 500,
        }
    }
}

impl MockLatency {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.mock_latency_min_ms, settings.mock_latency_max_ms)
    }

    /// Draw a delay uniformly from the range. A collapsed or inverted
    /// range yields `min_ms`.
    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..=self.max_ms))
    }

    async fn wait(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// What a mock tool returns once its delay has elapsed.
#[derive(Clone)]
pub enum MockOutput {
    Fixed(Value),
    /// The payload, unchanged.
    Echo,
    Map(Arc<dyn Fn(Value) -> Value + Send + Sync>),
}

impl MockOutput {
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::Map(Arc::new(f))
    }

    fn produce(&self, payload: Value) -> Value {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Echo => payload,
            Self::Map(f) => f(payload),
        }
    }
}

#[derive(Clone)]
pub struct MockTool {
    latency: MockLatency,
    output: MockOutput,
}

#[async_trait]
impl ToolHandler for MockTool {
    async fn execute(&self, payload: Value) -> anyhow::Result<Value> {
        self.latency.wait().await;
        Ok(self.output.produce(payload))
    }
}

/// A mock tool that always fails after its delay.
#[derive(Clone)]
pub struct FailingMockTool {
    latency: MockLatency,
    message: String,
}

#[async_trait]
impl ToolHandler for FailingMockTool {
    async fn execute(&self, _payload: Value) -> anyhow::Result<Value> {
        self.latency.wait().await;
        Err(anyhow::anyhow!("{}", self.message))
    }
}

pub fn mock_tool(
    name: impl Into<String>,
    description: impl Into<String>,
    latency: MockLatency,
    output: MockOutput,
) -> Tool {
    Tool::new(name, description, MockTool { latency, output })
}

pub fn mock_failing_tool(
    name: impl Into<String>,
    description: impl Into<String>,
    latency: MockLatency,
    message: impl Into<String>,
) -> Tool {
    Tool::new(
        name,
        description,
        FailingMockTool {
            latency,
            message: message.into(),
        },
    )
}
