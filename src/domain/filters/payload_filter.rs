//! Payload filter implementation.

use tracing::{info, warn};

use super::Filter;
use crate::config::HookDefinition;
use crate::domain::{InboundRequest, Verdict, WebhookPayload};

/// Requires a JSON body and compares its ref against the hook's `Ref`.
///
/// A ref mismatch is only logged. Deployments rely on `Ref` being advisory,
/// so the command still runs.
pub struct PayloadFilter;

impl Filter for PayloadFilter {
    fn check(&self, hook: &HookDefinition, request: &InboundRequest) -> Verdict {
        let payload = match WebhookPayload::from_body(&request.body) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Invalid webhook payload for {}: {}", hook.webhook_url, e);
                return Verdict::reject(format!("invalid payload: {}", e));
            }
        };

        if payload.git_ref != hook.git_ref {
            info!("Ignoring ref: {}", payload.git_ref);
        }

        Verdict::Proceed
    }

    fn priority(&self) -> u32 {
        20
    }
}
