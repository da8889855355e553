use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - Component status, including a live database ping
pub async fn health(State(state): State<AppState>) -> Response {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "operational",
        Err(e) => {
            log::warn!("Health check database ping failed: {}", e);
            "unavailable"
        }
    };

    let webhook = if state.verifier.is_some() {
        "operational"
    } else {
        "unconfigured"
    };

    let healthy = database == "operational" && webhook == "operational";

    let body = json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "webhook": webhook,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe (ready to accept traffic?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response(),
    }
}
