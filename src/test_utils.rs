//! Shared helpers for unit tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, Method};
use tracing::subscriber::DefaultGuard;

use crate::config::HookDefinition;
use crate::domain::filters::EVENT_HEADER;
use crate::domain::InboundRequest;

/// The `/deploy` hook used throughout the tests.
pub fn deploy_hook() -> HookDefinition {
    HookDefinition {
        webhook_url: "/deploy".to_string(),
        events: vec!["push".to_string()],
        git_ref: "refs/heads/main".to_string(),
        command: "echo hi".to_string(),
    }
}

/// A POST to `/deploy` carrying one event header per entry in `events`.
pub fn webhook_request(events: &[&str], body: &str) -> InboundRequest {
    let mut headers = HeaderMap::new();
    for event in events {
        headers.append(EVENT_HEADER, HeaderValue::from_str(event).unwrap());
    }
    InboundRequest {
        method: Method::POST,
        path: "/deploy".to_string(),
        headers,
        body: Bytes::copy_from_slice(body.as_bytes()),
    }
}

/// Log output captured from a thread-local subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route this thread's events into the buffer until the guard drops.
    pub fn install(&self) -> DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
