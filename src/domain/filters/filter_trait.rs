//! Filter trait definition.

use crate::config::HookDefinition;
use crate::domain::{InboundRequest, Verdict};

/// Trait for request filters.
pub trait Filter: Send + Sync {
    /// Decide whether `request` may proceed to run `hook`.
    ///
    /// Implementations log their own rejections.
    fn check(&self, hook: &HookDefinition, request: &InboundRequest) -> Verdict;

    /// Get the priority of this filter (lower = runs earlier).
    fn priority(&self) -> u32;
}
