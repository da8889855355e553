//! Identity-provider webhook handler
//!
//! Receives signed user lifecycle events and mirrors them into the
//! frontend_users store. Processing is idempotent with respect to
//! redelivery: a `user.created` for an existing clerk_id and a
//! `user.deleted` for an absent one are both acknowledged no-ops.

use crate::api::webhooks::webhook_response::WebhookResponse;
use crate::{ApiError, ApiResult, AppState};

use cs_core::{FrontendUser, IdentityEvent};
use cs_db::FrontendUserRepository;
use cs_webhook::{HEADER_MESSAGE_ID, HEADER_SIGNATURE, HEADER_TIMESTAMP};

use std::panic::Location;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use error_location::ErrorLocation;

/// POST /api/clerk-webhook
///
/// Verification happens against the exact raw body bytes; parsing only
/// starts once the signature checks out.
pub async fn receive_clerk_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<WebhookResponse>> {
    let msg_id = required_header(&headers, HEADER_MESSAGE_ID)?;
    let timestamp = required_header(&headers, HEADER_TIMESTAMP)?;
    let signature = required_header(&headers, HEADER_SIGNATURE)?;

    let verifier = state.verifier.as_ref().ok_or_else(|| ApiError::Misconfigured {
        message: "Webhook signing secret is not configured".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    verifier.verify(msg_id, timestamp, signature, &body)?;

    let event: IdentityEvent =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest {
            message: format!("Malformed event payload: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let repo = FrontendUserRepository::new(state.pool.clone());

    let action = match event {
        IdentityEvent::UserCreated { data } => {
            if repo.find_by_clerk_id(&data.id).await?.is_some() {
                log::debug!("user.created for existing clerk_id {}, skipping", data.id);
                "skipped"
            } else {
                let user = FrontendUser::new(&data.id, data.primary_email())?;
                // A racing redelivery can slip between the check and the
                // insert; the clerk_id uniqueness constraint downgrades
                // that to a no-op instead of a duplicate row.
                if repo.insert_if_absent(&user).await? {
                    log::info!("Created frontend user for clerk_id {}", user.clerk_id);
                    "created"
                } else {
                    "skipped"
                }
            }
        }
        IdentityEvent::UserDeleted { data } => match repo.find_by_clerk_id(&data.id).await? {
            Some(user) => {
                repo.delete(user.id).await?;
                log::info!("Deleted frontend user for clerk_id {}", data.id);
                "deleted"
            }
            None => {
                log::debug!("user.deleted for unknown clerk_id {}, skipping", data.id);
                "skipped"
            }
        },
        IdentityEvent::Unrecognized => {
            log::debug!("Ignoring unrecognized event type");
            "ignored"
        }
    };

    Ok(Json(WebhookResponse::new(action)))
}

#[track_caller]
fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> ApiResult<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::MissingHeaders {
            message: format!("Missing or invalid {} header", name),
            location: ErrorLocation::from(Location::caller()),
        })
}
