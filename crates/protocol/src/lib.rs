//! # ca-protocol
//!
//! Shared data models for the classroom agent dispatch layer.
//!
//! This crate defines the structures exchanged between callers (UI layer,
//! CLI, test harness) and the agent core:
//! - Requests and the normalized response envelope
//! - Agent and tool descriptors returned by discovery operations
//! - Settings read from `.classroom-agents/config.toml`
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent categories and discovery descriptors
//! - [`dispatch_models`]: Requests and response envelopes
//! - [`config_models`]: Settings from config.toml
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, ts-rs and thiserror
//! - TypeScript generation: All types derive `TS` for the web front-end
//! - Independent compilation: No dependencies on other classroom-agents crates

pub mod agent_models;
pub mod config_models;
pub mod dispatch_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
pub use dispatch_models::*;
