use cs_webhook::SignatureVerifier;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for all request handlers.
///
/// `verifier` is None only when the process was wired without a signing
/// secret; the webhook handler answers 500 in that case. Production startup
/// rejects that configuration before binding the listener.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub verifier: Option<Arc<SignatureVerifier>>,
}
