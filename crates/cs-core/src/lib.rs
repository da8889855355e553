pub mod error;
pub mod events;
pub mod models;

pub use error::{CoreError, Result};
pub use events::identity_event::{EmailAddress, IdentityEvent, UserCreatedData, UserDeletedData};
pub use models::frontend_user::{FrontendUser, Preferences};

pub use error_location::ErrorLocation;
