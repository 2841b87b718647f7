//! Configuration data types.
//!
//! Field names follow the deployed `conf.json` format exactly:
//!
//! ```json
//! {
//!   "Log": "/var/log/watchandlisten.log",
//!   "Addr": ":8080",
//!   "Hooks": [
//!     {
//!       "Webhook_url": "/deploy",
//!       "Events": ["push"],
//!       "Ref": "refs/heads/main",
//!       "Command": "cd /srv/app && git pull"
//!     }
//!   ]
//! }
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use super::validation;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/watchandlisten/conf.json";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log file, appended to in server mode and served on `GET /`
    #[serde(rename = "Log")]
    pub log: PathBuf,

    /// Listen address (`host:port`, `:port`, or empty for port 80)
    #[serde(rename = "Addr", default)]
    pub addr: String,

    /// Hook definitions, searched in order
    #[serde(rename = "Hooks", default)]
    pub hooks: Vec<HookDefinition>,

    /// Shell used to run hook commands with `-c`
    #[serde(rename = "Shell", default = "default_shell")]
    pub shell: String,
}

impl Config {
    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Non-fatal configuration problems worth reporting at startup.
    pub fn warnings(&self) -> Vec<String> {
        validation::warnings(self)
    }

    /// Address to bind, expanding the `:port` and empty shorthands to all interfaces.
    pub fn listen_addr(&self) -> String {
        if self.addr.is_empty() {
            "0.0.0.0:80".to_string()
        } else if self.addr.starts_with(':') {
            format!("0.0.0.0{}", self.addr)
        } else {
            self.addr.clone()
        }
    }

    /// Human-readable lines describing the loaded configuration.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Serving on: {}", self.addr),
            format!("Log location: {}", self.log.display()),
            "Registered webhooks:".to_string(),
        ];
        for hook in &self.hooks {
            lines.push(format!("  {} {:?}:", hook.webhook_url, hook.events));
            lines.push(format!("    {}", hook.git_ref));
            lines.push(format!("    {}", hook.command));
        }
        lines
    }
}

/// A webhook path mapped to the command it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HookDefinition {
    /// Request path this hook answers on, e.g. `/deploy`
    #[serde(rename = "Webhook_url")]
    pub webhook_url: String,

    /// Accepted `X-Github-Event` values
    #[serde(rename = "Events", default)]
    pub events: Vec<String>,

    /// Expected ref; a mismatch is logged but does not block the command
    #[serde(rename = "Ref", default)]
    pub git_ref: String,

    /// Shell expression to execute
    #[serde(rename = "Command", default)]
    pub command: String,
}

fn default_shell() -> String {
    "sh".to_string()
}
