pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    webhooks::{clerk::receive_clerk_webhook, webhook_response::WebhookResponse},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
