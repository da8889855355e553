use crate::{DbError, Result as DbErrorResult};

use cs_core::ErrorLocation;

use std::panic::Location;

use sqlx::SqlitePool;

/// Apply all pending schema migrations.
pub async fn run(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
