//! Svix-compatible webhook signature verification.
//!
//! The identity provider signs each delivery with HMAC-SHA256 over
//! `{message id}.{timestamp}.{raw body}`, keyed by the shared secret
//! (`whsec_` followed by the base64 key). The signature header holds one or
//! more space-separated `v1,<base64>` entries; verification succeeds when any
//! `v1` entry matches. Comparison is constant-time.

use crate::{Result as VerifyErrorResult, VerifyError};

use std::panic::Location;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

const SECRET_PREFIX: &str = "whsec_";
const SIGNATURE_VERSION: &str = "v1";

pub struct SignatureVerifier {
    key: Vec<u8>,
    tolerance_secs: u64,
}

impl SignatureVerifier {
    /// Create a verifier from the shared signing secret.
    ///
    /// Accepts the secret with or without the `whsec_` prefix; the remainder
    /// must be valid base64.
    #[track_caller]
    pub fn new(secret: &str, tolerance_secs: u64) -> VerifyErrorResult<Self> {
        let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);

        let key = BASE64.decode(encoded).map_err(|e| VerifyError::InvalidSecret {
            message: format!("secret is not valid base64: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if key.is_empty() {
            return Err(VerifyError::InvalidSecret {
                message: "secret key is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            key,
            tolerance_secs,
        })
    }

    /// Verify a delivery against its three signature headers and raw body.
    ///
    /// The body must be the exact bytes received on the wire; re-serialized
    /// JSON will not match.
    #[track_caller]
    pub fn verify(
        &self,
        msg_id: &str,
        timestamp: &str,
        signature_header: &str,
        payload: &[u8],
    ) -> VerifyErrorResult<()> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| VerifyError::InvalidTimestamp {
                value: timestamp.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Saturating arithmetic: the timestamp is attacker-controlled and may
        // sit at either i64 extreme, which would overflow a plain subtraction.
        let skew = chrono::Utc::now().timestamp().saturating_sub(ts).saturating_abs();
        if skew > self.tolerance_secs as i64 {
            return Err(VerifyError::TimestampOutOfTolerance {
                skew_secs: skew,
                tolerance_secs: self.tolerance_secs,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let expected = self.compute(msg_id, ts, payload);

        for entry in signature_header.split_whitespace() {
            let Some((version, candidate)) = entry.split_once(',') else {
                continue;
            };

            if version == SIGNATURE_VERSION && constant_time_eq(candidate, &expected) {
                return Ok(());
            }
        }

        Err(VerifyError::SignatureMismatch {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Produce the `v1,<base64>` signature entry for a payload.
    ///
    /// This is the sending side of the scheme; used by tests and local
    /// delivery tooling to construct authentic requests.
    pub fn sign(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> String {
        format!(
            "{},{}",
            SIGNATURE_VERSION,
            self.compute(msg_id, timestamp, payload)
        )
    }

    /// base64(HMAC-SHA256(key, "{id}.{ts}.{body}"))
    fn compute(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> String {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.key)
            .expect("HMAC can take key of any size");

        mac.update(msg_id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);

        BASE64.encode(mac.finalize().into_bytes())
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
