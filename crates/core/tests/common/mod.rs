//! Common test utilities shared by the integration tests.
//!
//! This module provides:
//! - Test fixtures (agents, orchestrators, config directories)
//! - Custom assertions on response envelopes

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
