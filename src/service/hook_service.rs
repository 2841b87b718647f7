//! Hook processing service.

use tracing::{debug, info};

use crate::config::{Config, HookDefinition};
use crate::domain::{
    CommandResult, CommandRunner, FilterChain, HookTable, InboundRequest, WatchError,
};

/// Service tying together hook lookup, filtering and command execution.
///
/// Shared read-only between concurrent requests.
pub struct HookService {
    table: HookTable,
    filter_chain: FilterChain,
    runner: CommandRunner,
}

impl HookService {
    /// Create a new HookService from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            table: HookTable::new(config.hooks.clone()),
            filter_chain: FilterChain::new(),
            runner: CommandRunner::new(config.shell.clone()),
        }
    }

    /// Look up the hook registered at `path`.
    pub fn find(&self, path: &str) -> Option<&HookDefinition> {
        self.table.find(path)
    }

    /// Whether `request` should trigger `hook`.
    pub fn applies_to(&self, hook: &HookDefinition, request: &InboundRequest) -> bool {
        debug!(
            "Filtering {} {} for hook {}",
            request.method, request.path, hook.webhook_url
        );
        self.filter_chain.applies_to(hook, request)
    }

    /// Run a hook's command. Failures are logged, never propagated.
    pub fn run(&self, hook: &HookDefinition) -> CommandResult {
        self.runner.run(&hook.command)
    }

    /// Run the hook at `path` once, outside of any request.
    ///
    /// Unlike the server path, an unknown hook or failing command is an error.
    pub fn run_one(&self, path: &str) -> Result<CommandResult, WatchError> {
        let hook = self
            .find(path)
            .ok_or_else(|| WatchError::UnknownHook(path.to_string()))?;

        info!("Running {} once", hook.webhook_url);
        let result = self.run(hook);
        if let Some(reason) = result.failure {
            return Err(WatchError::CommandFailed {
                command: result.command,
                reason,
            });
        }

        Ok(result)
    }
}
