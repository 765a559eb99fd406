//! Agent registry and request routing.
//!
//! [`Orchestrator`] is an independently constructible registry/router.
//! [`default_orchestrator`] returns one shared process-wide instance that
//! bootstrap code populates at startup.

mod registry;
pub mod router;

pub use router::{Orchestrator, RoutingError};

use std::sync::LazyLock;

static DEFAULT_ORCHESTRATOR: LazyLock<Orchestrator> = LazyLock::new(Orchestrator::new);

/// The process-wide orchestrator. Starts empty.
pub fn default_orchestrator() -> &'static Orchestrator {
    &DEFAULT_ORCHESTRATOR
}
