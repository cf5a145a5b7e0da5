//! Owner-scoped access to the `meals` table.
//!
//! Every statement that reads or writes an existing meal binds the owner id
//! in its WHERE clause; there is no unscoped lookup.

use crate::Result as DbErrorResult;
use crate::repositories::row_decode::{millis_column, seconds_column, uuid_column};

use dd_core::{Meal, StreakOrder};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "meals";

pub struct MealRepository {
    pool: SqlitePool,
}

impl MealRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, meal: &Meal) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO meals (
                  id, user_id, name, description, is_on_diet, date,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(meal.id.to_string())
        .bind(meal.owner_id.to_string())
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.is_on_diet)
        .bind(meal.occurred_at_millis())
        .bind(meal.created_at.timestamp())
        .bind(meal.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All meals of one owner, oldest `occurred_at` first
    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<Meal>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, name, description, is_on_diet, date,
                     created_at, updated_at
              FROM meals
              WHERE user_id = ?
              ORDER BY date ASC, created_at ASC, rowid ASC
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Primary-key lookup restricted to the owner; a foreign meal reads as absent
    pub async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> DbErrorResult<Option<Meal>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, name, description, is_on_diet, date,
                     created_at, updated_at
              FROM meals
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// Replace the editable columns. Returns the number of rows touched (0 or 1).
    pub async fn update(&self, meal: &Meal) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              UPDATE meals
              SET name = ?, description = ?, is_on_diet = ?, date = ?, updated_at = ?
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.is_on_diet)
        .bind(meal.occurred_at_millis())
        .bind(meal.updated_at.timestamp())
        .bind(meal.id.to_string())
        .bind(meal.owner_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete. Deleting an absent or foreign meal affects 0 rows and is not an error.
    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM meals WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Diet flags of one owner, in the order the streak should be scanned
    pub async fn diet_flags(&self, owner_id: Uuid, order: StreakOrder) -> DbErrorResult<Vec<bool>> {
        let sql = match order {
            StreakOrder::Chronological => {
                r#"
                  SELECT is_on_diet
                  FROM meals
                  WHERE user_id = ?
                  ORDER BY date ASC, created_at ASC, rowid ASC
                  "#
            }
            StreakOrder::Store => {
                r#"
                  SELECT is_on_diet
                  FROM meals
                  WHERE user_id = ?
                  "#
            }
        };

        let flags: Vec<bool> = sqlx::query_scalar(sql)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        Ok(flags)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Meal> {
        Ok(Meal {
            id: uuid_column(row, TABLE, "id")?,
            owner_id: uuid_column(row, TABLE, "user_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            is_on_diet: row.try_get("is_on_diet")?,
            occurred_at: millis_column(row, TABLE, "date")?,
            created_at: seconds_column(row, TABLE, "created_at")?,
            updated_at: seconds_column(row, TABLE, "updated_at")?,
        })
    }
}
