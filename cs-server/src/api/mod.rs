pub mod error;
pub mod webhooks;
