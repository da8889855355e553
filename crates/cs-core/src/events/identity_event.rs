//! Identity-provider webhook event payloads.
//!
//! Events arrive as JSON with a `type` discriminator and a `data` object.
//! Only the user lifecycle events we mirror are modeled with typed payloads;
//! everything else falls through to `Unrecognized` so that new provider
//! event types never break the handler.

use serde::Deserialize;

/// A user lifecycle event from the identity provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum IdentityEvent {
    #[serde(rename = "user.created")]
    UserCreated { data: UserCreatedData },

    #[serde(rename = "user.deleted")]
    UserDeleted { data: UserDeletedData },

    /// Any event type we do not handle. Accepted and ignored.
    #[serde(other)]
    Unrecognized,
}

/// Payload of a `user.created` event.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreatedData {
    /// The provider's unique user id.
    pub id: String,
    /// Ordered email records; the first entry is the primary address.
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

/// Payload of a `user.deleted` event.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDeletedData {
    pub id: String,
    /// The provider marks deletion events explicitly; parsed but unused.
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailAddress {
    pub email_address: String,
}

impl UserCreatedData {
    /// Primary email address, or the empty string when the provider
    /// delivered no email records.
    pub fn primary_email(&self) -> &str {
        self.email_addresses
            .first()
            .map(|e| e.email_address.as_str())
            .unwrap_or("")
    }
}
