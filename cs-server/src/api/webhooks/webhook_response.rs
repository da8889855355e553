use serde::Serialize;

/// Acknowledgement returned for every successfully processed delivery,
/// including the no-op branches.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub received: bool,
    /// What the synchronizer did: "created", "deleted", "skipped" or "ignored"
    pub action: &'static str,
}

impl WebhookResponse {
    pub fn new(action: &'static str) -> Self {
        Self {
            received: true,
            action,
        }
    }
}
