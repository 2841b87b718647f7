//! Ordered hook table.

use crate::config::HookDefinition;

/// Hook definitions in configuration order.
///
/// Paths are not required to be unique; lookup returns the first match.
#[derive(Debug, Clone, Default)]
pub struct HookTable {
    hooks: Vec<HookDefinition>,
}

impl HookTable {
    pub fn new(hooks: Vec<HookDefinition>) -> Self {
        Self { hooks }
    }

    /// Find the first hook registered at `path`.
    pub fn find(&self, path: &str) -> Option<&HookDefinition> {
        self.hooks.iter().find(|hook| hook.webhook_url == path)
    }
}
