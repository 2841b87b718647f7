//! Core domain types for webhook requests and command results.

use axum::body::Bytes;
use axum::http::{HeaderMap, Method};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Inbound webhook request as seen by the filters.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// The only part of a webhook body we look at.
#[derive(Debug, Clone, Default)]
pub struct WebhookPayload {
    /// Git ref the event refers to. GitHub sends `ref`; older senders `Ref`.
    pub git_ref: String,
}

impl WebhookPayload {
    /// Parse the first JSON value in `body`; anything after it is ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
            .unwrap_or_else(|| Err(de::Error::custom("empty request body")))
    }
}

/// Matches the ref key case-insensitively; when several keys match, the last
/// non-null one wins. A top-level `null` is an empty payload.
impl<'de> Deserialize<'de> for WebhookPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PayloadVisitor;

        impl<'de> Visitor<'de> for PayloadVisitor {
            type Value = WebhookPayload;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a webhook payload object")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WebhookPayload::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut payload = WebhookPayload::default();
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("ref") {
                        if let Some(git_ref) = map.next_value::<Option<String>>()? {
                            payload.git_ref = git_ref;
                        }
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(payload)
            }
        }

        deserializer.deserialize_any(PayloadVisitor)
    }
}

/// Outcome of a single filter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Continue to the next filter, or run the command
    Proceed,
    /// Stop processing; the reason has already been logged
    Reject { reason: String },
}

impl Verdict {
    pub fn reject(reason: impl Into<String>) -> Self {
        Verdict::Reject {
            reason: reason.into(),
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, Verdict::Proceed)
    }
}

/// Result of running a hook command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Command that was executed
    pub command: String,
    /// Combined stdout and stderr output
    pub output: String,
    /// Why the command failed, if it did
    pub failure: Option<String>,
}

impl CommandResult {
    /// Whether the command spawned and exited with status zero.
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }
}
