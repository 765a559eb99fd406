//! # ca-core
//!
//! Agent dispatch layer for the classroom platform.
//!
//! This crate provides:
//! - The `Agent` record and its total tool execution contract
//! - Mock tools and the built-in classroom agents
//! - The `Orchestrator` registry and router
//! - Configuration loading from `.classroom-agents/`
//!
//! ## Modules
//!
//! - [`agents`]: Agents, tools and the agent factory
//! - [`orchestrator`]: Registry, routing and the default instance
//! - [`config`]: Configuration loading and validation
//! - [`bootstrap`]: Building a populated orchestrator from configuration

pub mod agents;
pub mod bootstrap;
pub mod config;
pub mod orchestrator;
