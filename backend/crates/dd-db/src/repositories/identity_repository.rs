use crate::Result as DbErrorResult;
use crate::repositories::row_decode::{seconds_column, uuid_column};

use dd_core::Identity;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity. Fails with a unique violation if the token was already issued.
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, session_id, name, email, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.session_token)
        .bind(&identity.name)
        .bind(&identity.email)
        .bind(identity.created_at.timestamp())
        .bind(identity.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Exact-match lookup by session token
    pub async fn find_by_session_token(&self, token: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
              SELECT id, session_id, name, email, created_at, updated_at
              FROM users
              WHERE session_id = ?
              "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
              SELECT id, session_id, name, email, created_at, updated_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Identity> {
        Ok(Identity {
            id: uuid_column(row, TABLE, "id")?,
            session_token: row.try_get("session_id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            created_at: seconds_column(row, TABLE, "created_at")?,
            updated_at: seconds_column(row, TABLE, "updated_at")?,
        })
    }
}
