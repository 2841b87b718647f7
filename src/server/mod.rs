//! HTTP server receiving webhooks.
//!
//! # Endpoints
//!
//! - `GET /` - Returns the log file
//! - `POST <Webhook_url>` - Triggers the matching hook (always 200 for known paths)
//! - anything else - 404 with body `404`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

mod handlers;

pub use handlers::{hook_handler, log_handler};

use crate::service::HookService;

/// Shared application state.
///
/// Passed to all handlers via Axum's `State` extractor. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    hooks: Arc<HookService>,
    log_path: PathBuf,
}

impl AppState {
    pub fn new(hooks: HookService, log_path: impl Into<PathBuf>) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                hooks: Arc::new(hooks),
                log_path: log_path.into(),
            }),
        }
    }

    pub fn hooks(&self) -> &HookService {
        &self.inner.hooks
    }

    /// Owned handle to the hook service for blocking tasks.
    pub fn hooks_handle(&self) -> Arc<HookService> {
        Arc::clone(&self.inner.hooks)
    }

    pub fn log_path(&self) -> &Path {
        &self.inner.log_path
    }
}

/// Builds the axum Router.
///
/// Request bodies are unbounded: GitHub push payloads can reach 25 MB.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::extract::DefaultBodyLimit;
    use axum::routing::any;

    axum::Router::new()
        .route("/", any(log_handler))
        .fallback(hook_handler)
        .layer(DefaultBodyLimit::disable())
        .with_state(app_state)
}

/// Bind `addr` and serve until the process is terminated.
pub async fn serve(addr: &str, app_state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to listen on {}", addr))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(app_state))
        .await
        .context("Server error")
}
