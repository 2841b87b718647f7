//! watchandlisten: minimal webhook receiver
//!
//! Listens for POSTed GitHub webhooks, checks the event header against the
//! configured hook, and runs the hook's shell command. `GET /` returns the log.

mod cli;
mod config;
mod domain;
mod server;
mod service;
#[cfg(test)]
mod test_utils;

use anyhow::Result;
use tracing::{info, warn};

use cli::Cli;
use config::ConfigService;
use server::AppState;
use service::HookService;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = ConfigService::load(&cli.conf)?;

    if cli.test {
        ConfigService::check_log_writable(&config.log)?;
        for line in config.summary() {
            eprintln!("{}", line);
        }
        for warning in config.warnings() {
            eprintln!("Warning: {}", warning);
        }
        eprintln!("Configuration is valid.");
        return Ok(());
    }

    // Logging is set up before any threads exist so the local offset resolves
    domain::logger::init(&config.log)?;
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let service = HookService::new(&config);

    if let Some(path) = cli.run {
        let result = service.run_one(&path)?;
        print!("{}", result.output);
        return Ok(());
    }

    for line in config.summary() {
        info!("{}", line);
    }

    let addr = config.listen_addr();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(&addr, AppState::new(service, config.log)))
}
