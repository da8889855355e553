//! Repository for mirrored identity-provider users.
//!
//! `clerk_id` carries a UNIQUE constraint in the schema. The webhook handler
//! checks for an existing row before inserting, but that check-then-act pair
//! is not atomic across concurrent deliveries of the same event; the
//! constraint is what actually guarantees at most one row per `clerk_id`, and
//! `insert_if_absent` turns a constraint hit into the idempotent no-op.

use crate::{DbError, Result as DbErrorResult};

use cs_core::{ErrorLocation, FrontendUser, Preferences};

use std::panic::Location;

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct FrontendUserRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct FrontendUserRow {
    id: String,
    clerk_id: String,
    email: String,
    newsletter: bool,
    created_at: i64,
    updated_at: i64,
}

impl FrontendUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_clerk_id(&self, clerk_id: &str) -> DbErrorResult<Option<FrontendUser>> {
        let row = sqlx::query_as::<_, FrontendUserRow>(
            r#"
                SELECT id, clerk_id, email, newsletter, created_at, updated_at
                FROM frontend_users
                WHERE clerk_id = ?
            "#,
        )
        .bind(clerk_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(FrontendUser::try_from).transpose()
    }

    /// Insert the record unless a row with the same `clerk_id` already
    /// exists. Returns true when a row was inserted, false when the
    /// uniqueness constraint made the insert a no-op.
    pub async fn insert_if_absent(&self, user: &FrontendUser) -> DbErrorResult<bool> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO frontend_users (id, clerk_id, email, newsletter, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(clerk_id) DO NOTHING
            "#,
        )
        .bind(&id)
        .bind(&user.clerk_id)
        .bind(&user.email)
        .bind(user.preferences.newsletter)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let id_str = id.to_string();

        sqlx::query("DELETE FROM frontend_users WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM frontend_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

impl TryFrom<FrontendUserRow> for FrontendUser {
    type Error = DbError;

    fn try_from(row: FrontendUserRow) -> DbErrorResult<Self> {
        Ok(FrontendUser {
            id: Uuid::parse_str(&row.id).map_err(|e| DbError::CorruptRow {
                message: format!("invalid UUID in frontend_users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            clerk_id: row.clerk_id,
            email: row.email,
            preferences: Preferences {
                newsletter: row.newsletter,
            },
            created_at: DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| {
                DbError::CorruptRow {
                    message: "invalid timestamp in frontend_users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(row.updated_at, 0).ok_or_else(|| {
                DbError::CorruptRow {
                    message: "invalid timestamp in frontend_users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}
