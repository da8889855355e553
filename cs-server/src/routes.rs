use crate::{api, health};

use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Identity-provider webhook receiver
        .route(
            "/api/clerk-webhook",
            post(api::webhooks::clerk::receive_clerk_webhook),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
}
