//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Request, payload and result types
//! - The ordered hook table
//! - Filter trait and implementations
//! - Shell command runner
//! - Logger writing to the log file and stderr

mod error;
pub mod filters;
mod hooks;
pub mod logger;
mod runner;
mod types;

pub use error::WatchError;
pub use filters::FilterChain;
pub use hooks::HookTable;
pub use runner::CommandRunner;
pub use types::{CommandResult, InboundRequest, Verdict, WebhookPayload};
