//! Event header filter implementation.

use tracing::info;

use super::Filter;
use crate::config::HookDefinition;
use crate::domain::{InboundRequest, Verdict};

/// Header naming the GitHub event type.
pub const EVENT_HEADER: &str = "x-github-event";

/// Requires exactly one event header whose value is in the hook's `Events`.
pub struct EventFilter;

impl EventFilter {
    /// The single non-empty event value, or `None` when absent, empty or repeated.
    fn single_event(request: &InboundRequest) -> Option<&str> {
        let mut values = request.headers.get_all(EVENT_HEADER).iter();
        match (values.next(), values.next()) {
            (Some(value), None) => value.to_str().ok().filter(|v| !v.is_empty()),
            _ => None,
        }
    }
}

impl Filter for EventFilter {
    fn check(&self, hook: &HookDefinition, request: &InboundRequest) -> Verdict {
        let Some(event) = Self::single_event(request) else {
            info!("No X-Github-Event header found");
            return Verdict::reject("no event header");
        };

        if !hook.events.iter().any(|e| e == event) {
            info!("{} not interested in {}", hook.webhook_url, event);
            return Verdict::reject(format!("not interested in {}", event));
        }

        Verdict::Proceed
    }

    fn priority(&self) -> u32 {
        10
    }
}
