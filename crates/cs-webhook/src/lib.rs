pub mod error;
pub mod verifier;

pub use error::{Result, VerifyError};
pub use verifier::SignatureVerifier;


/// Webhook transport headers carrying the signature material.
pub const HEADER_MESSAGE_ID: &str = "svix-id";
pub const HEADER_TIMESTAMP: &str = "svix-timestamp";
pub const HEADER_SIGNATURE: &str = "svix-signature";
