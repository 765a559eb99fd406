//! Agent abstraction and construction.
//!
//! This module provides the `Agent` record and its tool execution
//! contract, the `Tool` abstraction, mock tools with simulated latency,
//! and the factory for the built-in classroom agents.

pub mod agent_kind;
pub mod base;
pub mod factory;
pub mod mock;
pub mod tool;

pub use agent_kind::AgentKind;
pub use base::{Agent, AgentError};
pub use factory::AgentFactory;
pub use mock::{mock_failing_tool, mock_tool, MockLatency, MockOutput};
pub use tool::{FnTool, Tool, ToolHandler};
