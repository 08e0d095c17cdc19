//! Span helpers for the interactive session.
//!
//! # Design
//! - One session span stays entered for the lifetime of the process and carries the build id.
//! - Each dispatched action gets its own child span so command logs can be attributed.

use tracing::{Span, span::Entered};

use crate::init::build_sha;

/// Guard that keeps the session-level span entered for the lifetime of the process.
pub struct SessionGuard {
    _guard: Entered<'static>,
}

impl SessionGuard {
    /// Enter the session span, tagged with the effective user id.
    #[must_use]
    pub fn new(euid: u32) -> Self {
        let span: &'static Span = Box::leak(Box::new(
            tracing::info_span!("session", euid, build_sha = %build_sha()),
        ));
        let guard = span.enter();
        Self { _guard: guard }
    }
}

/// Span wrapping one dispatched menu action.
#[must_use]
pub fn action_span(key: &str, label: &str) -> Span {
    tracing::info_span!("action", key = %key, label = %label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_guard_can_be_entered_and_dropped() {
        let guard = SessionGuard::new(0);
        drop(guard);
    }

    #[test]
    fn action_span_is_enterable() {
        let span = action_span("1", "change SSH port");
        let _entered = span.enter();
        tracing::debug!("inside action span");
    }
}
