//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Validate configuration.
///
/// Only settings the server cannot start with are errors. Duplicate webhook
/// paths are allowed; lookup takes the first match.
pub fn validate(config: &Config) -> Result<()> {
    if config.log.as_os_str().is_empty() {
        bail!("Log: path cannot be empty");
    }
    if config.log.to_string_lossy().contains('\0') {
        bail!("Log: path contains null character");
    }

    validate_addr(&config.addr)?;

    if config.shell.trim().is_empty() {
        bail!("Shell: cannot be empty");
    }

    Ok(())
}

/// Settings that load fine but are probably mistakes.
pub fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, hook) in config.hooks.iter().enumerate() {
        if !hook.webhook_url.starts_with('/') {
            warnings.push(format!(
                "Hooks[{}]: Webhook_url '{}' does not start with '/' and will never match",
                i, hook.webhook_url
            ));
        }
        if hook.command.trim().is_empty() {
            warnings.push(format!("Hooks[{}]: Command is empty", i));
        }
    }
    warnings
}

fn validate_addr(addr: &str) -> Result<()> {
    // Empty means all interfaces on port 80
    if addr.is_empty() {
        return Ok(());
    }
    let Some((_host, port)) = addr.rsplit_once(':') else {
        bail!("Addr: '{}' must be of the form host:port or :port", addr);
    };
    if port.parse::<u16>().is_err() {
        bail!("Addr: invalid port in '{}'", addr);
    }
    Ok(())
}
