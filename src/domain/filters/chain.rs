//! Filter chain implementation.

use tracing::debug;

use crate::config::HookDefinition;
use crate::domain::{InboundRequest, Verdict};

use super::{EventFilter, Filter, PayloadFilter};

/// Chain of filters applied to every request for a known hook.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Create the standard chain: event header check, then payload check.
    pub fn new() -> Self {
        let mut filters: Vec<Box<dyn Filter>> =
            vec![Box::new(EventFilter), Box::new(PayloadFilter)];

        // Sort by priority (lower = higher priority)
        filters.sort_by_key(|f| f.priority());

        Self { filters }
    }

    /// Run filters in order and return the first rejection, if any.
    pub fn check(&self, hook: &HookDefinition, request: &InboundRequest) -> Verdict {
        for filter in &self.filters {
            let verdict = filter.check(hook, request);
            if !verdict.is_proceed() {
                return verdict;
            }
        }

        Verdict::Proceed
    }

    /// Whether the hook's command should run for this request.
    pub fn applies_to(&self, hook: &HookDefinition, request: &InboundRequest) -> bool {
        match self.check(hook, request) {
            Verdict::Proceed => true,
            Verdict::Reject { reason } => {
                debug!("Skipping {}: {}", hook.webhook_url, reason);
                false
            }
        }
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}
