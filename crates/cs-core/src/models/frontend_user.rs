use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A mirrored identity-provider user.
///
/// `clerk_id` is the sole join key to the identity provider; every other
/// provider field lives upstream. `email` is a denormalized copy for
/// reference only and is never treated as authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendUser {
    pub id: Uuid,
    pub clerk_id: String,
    pub email: String,
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application-owned settings with no upstream source.
/// Never touched by the synchronizer after creation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub newsletter: bool,
}

impl FrontendUser {
    /// Build a new user record from a verified `user.created` payload.
    ///
    /// An empty email is allowed (the provider may deliver a user with no
    /// email addresses yet); an empty `clerk_id` is not, since the record
    /// would be unreachable by its only join key.
    #[track_caller]
    pub fn new(clerk_id: &str, email: &str) -> CoreErrorResult<Self> {
        if clerk_id.is_empty() {
            return Err(CoreError::Validation {
                message: "clerk_id must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            clerk_id: clerk_id.to_string(),
            email: email.to_string(),
            preferences: Preferences::default(),
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_clerk_id_when_constructed_then_validation_error() {
        let result = FrontendUser::new("", "a@b.com");

        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[test]
    fn given_empty_email_when_constructed_then_ok_with_default_preferences() {
        let user = FrontendUser::new("user_u1", "").unwrap();

        assert_eq!(user.email, "");
        assert!(!user.preferences.newsletter);
    }
}
