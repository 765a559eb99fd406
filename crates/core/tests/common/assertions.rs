//! Custom assertion helpers for response envelopes.

use ca_protocol::{AgentResponse, OrchestratorResponse};

/// Assert the envelope invariants: data iff success, error iff failure.
#[allow(dead_code)]
pub fn assert_well_formed(response: &AgentResponse) {
    assert_eq!(
        response.success,
        response.data.is_some(),
        "data must be present iff success: {response:?}"
    );
    assert_eq!(
        !response.success,
        response.error.is_some(),
        "error must be present iff failure: {response:?}"
    );
}

/// Assert a routed failure and return its error message.
#[allow(dead_code)]
pub fn assert_routed_failure<'a>(response: &'a OrchestratorResponse, handled_by: &str) -> &'a str {
    assert_well_formed(&response.response);
    assert!(!response.success(), "Expected failure, got: {response:?}");
    assert_eq!(response.handled_by, handled_by);
    response.error().unwrap_or_default()
}

/// Assert that a string contains a substring (case-insensitive).
#[allow(dead_code)]
pub fn assert_contains_ci(haystack: &str, needle: &str) {
    let haystack_lower = haystack.to_lowercase();
    let needle_lower = needle.to_lowercase();
    assert!(
        haystack_lower.contains(&needle_lower),
        "Expected '{haystack}' to contain '{needle}' (case-insensitive)"
    );
}
