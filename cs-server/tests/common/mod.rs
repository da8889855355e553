#![allow(dead_code)]

//! Test infrastructure for cs-server webhook tests

use cs_server::AppState;
use cs_webhook::SignatureVerifier;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use sqlx::SqlitePool;

pub const TOLERANCE_SECS: u64 = 300;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    cs_db::migrations::run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_secret() -> String {
    format!("whsec_{}", BASE64.encode(b"integration-test-signing-key...."))
}

/// AppState with a verifier wired from the test secret
pub async fn create_test_app_state() -> AppState {
    let verifier = SignatureVerifier::new(&test_secret(), TOLERANCE_SECS)
        .expect("Failed to create verifier");

    AppState {
        pool: create_test_pool().await,
        verifier: Some(Arc::new(verifier)),
    }
}

/// AppState without a signing secret - exercises the misconfiguration path
pub async fn create_unconfigured_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        verifier: None,
    }
}

/// Build a correctly signed webhook delivery for the test secret
pub fn signed_webhook_request(msg_id: &str, body: &str) -> Request<Body> {
    let signer =
        SignatureVerifier::new(&test_secret(), TOLERANCE_SECS).expect("Failed to create signer");
    let ts = chrono::Utc::now().timestamp();
    let signature = signer.sign(msg_id, ts, body.as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/clerk-webhook")
        .header("svix-id", msg_id)
        .header("svix-timestamp", ts.to_string())
        .header("svix-signature", signature)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn user_created_body(clerk_id: &str, email: &str) -> String {
    format!(
        r#"{{"type":"user.created","data":{{"id":"{}","email_addresses":[{{"email_address":"{}"}}]}}}}"#,
        clerk_id, email
    )
}

pub fn user_deleted_body(clerk_id: &str) -> String {
    format!(
        r#"{{"type":"user.deleted","data":{{"id":"{}","deleted":true}}}}"#,
        clerk_id
    )
}

/// Count rows for a clerk_id directly against the store
pub async fn count_users(pool: &SqlitePool, clerk_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM frontend_users WHERE clerk_id = ?")
        .bind(clerk_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

/// Total row count in the store
pub async fn total_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM frontend_users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
