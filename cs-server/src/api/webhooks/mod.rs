pub mod clerk;
pub mod webhook_response;
