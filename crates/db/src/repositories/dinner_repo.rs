//! Repository for the `dinners` table.

use dinnerlog_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::dinner::DinnerRow;

/// Column list for `dinners` queries.
const DINNER_COLUMNS: &str = "id, name, ingredients, recipe, notes, created_at, updated_at";

/// Provides CRUD operations for dinners.
pub struct DinnerRepo;

impl DinnerRepo {
    /// List all dinners, ordered by id.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<DinnerRow>, sqlx::Error> {
        let query = format!("SELECT {DINNER_COLUMNS} FROM dinners ORDER BY id");
        sqlx::query_as::<_, DinnerRow>(&query).fetch_all(pool).await
    }

    /// Total number of dinners.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM dinners")
            .fetch_one(pool)
            .await
    }

    /// Uniform random selection of `limit` distinct rows without replacement.
    ///
    /// Returns fewer than `limit` rows when the table is smaller; callers
    /// that need exactly `limit` must check [`Self::count`] first.
    pub async fn sample(pool: &SqlitePool, limit: i64) -> Result<Vec<DinnerRow>, sqlx::Error> {
        let query = format!("SELECT {DINNER_COLUMNS} FROM dinners ORDER BY RANDOM() LIMIT ?");
        sqlx::query_as::<_, DinnerRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a dinner by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<DinnerRow>, sqlx::Error> {
        let query = format!("SELECT {DINNER_COLUMNS} FROM dinners WHERE id = ?");
        sqlx::query_as::<_, DinnerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new dinner; storage assigns the id.
    ///
    /// `ingredients_json` must be the already-encoded JSON array text.
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        ingredients_json: &str,
        recipe: &str,
        notes: &str,
    ) -> Result<DinnerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO dinners (name, ingredients, recipe, notes) \
             VALUES (?, ?, ?, ?) \
             RETURNING {DINNER_COLUMNS}"
        );
        sqlx::query_as::<_, DinnerRow>(&query)
            .bind(name)
            .bind(ingredients_json)
            .bind(recipe)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all mutable fields of a dinner and bump `updated_at`.
    ///
    /// Returns `None` if no dinner with the given id exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        name: &str,
        ingredients_json: &str,
        recipe: &str,
        notes: &str,
    ) -> Result<Option<DinnerRow>, sqlx::Error> {
        let query = format!(
            "UPDATE dinners SET \
                 name = ?, ingredients = ?, recipe = ?, notes = ?, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {DINNER_COLUMNS}"
        );
        sqlx::query_as::<_, DinnerRow>(&query)
            .bind(name)
            .bind(ingredients_json)
            .bind(recipe)
            .bind(notes)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dinner by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dinners WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
