//! Request handlers.
//!
//! `/` serves the log file regardless of method. Every other path is a hook
//! candidate: a POST to a registered path runs the filters and, if they pass,
//! the hook command. Anything else is a 404.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;
use tracing::{error, info, warn};

use super::AppState;
use crate::domain::InboundRequest;

/// Stream the full contents of the log file.
///
/// An open error is logged and answered with an empty 200. A read error
/// mid-stream cuts the response short.
pub async fn log_handler(State(state): State<AppState>, method: Method) -> Response {
    info!("{} /", method);

    match tokio::fs::File::open(state.log_path()).await {
        Ok(file) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            Body::from_stream(ReaderStream::new(file)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to read {}: {}", state.log_path().display(), e);
            StatusCode::OK.into_response()
        }
    }
}

/// Dispatch a request to the hook registered at its path.
///
/// Known hooks always get an empty 200, whatever the filters or command decide.
pub async fn hook_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    info!("{} {}", method, path);

    if method != Method::POST {
        return not_found();
    }

    let Some(hook) = state.hooks().find(&path).cloned() else {
        warn!("POST to unknown hook: {}", path);
        return not_found();
    };

    let request = InboundRequest {
        method,
        path,
        headers,
        body,
    };
    if !state.hooks().applies_to(&hook, &request) {
        return StatusCode::OK.into_response();
    }

    // Commands block, so run them off the async workers. Carry the current
    // subscriber over so their logs land in the same place.
    let service = state.hooks_handle();
    let dispatch = tracing::dispatcher::get_default(|d| d.clone());
    let task = tokio::task::spawn_blocking(move || {
        tracing::dispatcher::with_default(&dispatch, || service.run(&hook))
    });
    if let Err(e) = task.await {
        error!("Hook task for {} did not complete: {}", request.path, e);
    }

    StatusCode::OK.into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404").into_response()
}
