pub mod error;
pub mod migrations;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::frontend_user_repository::FrontendUserRepository;
