use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOLERANCE_SECS, MAX_TOLERANCE_SECS};

use serde::Deserialize;

/// Inbound webhook verification settings.
///
/// The signing secret is shared with the identity provider and is required
/// for the server to start; it is never logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub signing_secret: Option<String>,
    /// Maximum accepted age/skew of the `svix-timestamp` header, in seconds.
    pub tolerance_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
        }
    }
}

impl WebhookConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.signing_secret {
            None => {
                return Err(ConfigError::webhook(
                    "webhook.signing_secret is required (set CS_WEBHOOK_SIGNING_SECRET)",
                ));
            }
            Some(ref secret) if secret.is_empty() => {
                return Err(ConfigError::webhook(
                    "webhook.signing_secret must not be empty",
                ));
            }
            Some(_) => {}
        }

        if self.tolerance_secs == 0 || self.tolerance_secs > MAX_TOLERANCE_SECS {
            return Err(ConfigError::webhook(format!(
                "webhook.tolerance_secs must be 1-{}, got {}",
                MAX_TOLERANCE_SECS, self.tolerance_secs
            )));
        }

        Ok(())
    }
}
