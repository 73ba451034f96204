use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodEntry {
    pub id: i64,
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
    pub fiber: Option<f64>,
    pub tags: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct NewFoodEntry {
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
    pub fiber: Option<f64>,
    pub tags: Option<String>,
    /// Defaults to the current time when absent.
    pub created_at: Option<OffsetDateTime>,
}

/// Timestamps are stored as whole-second UTC so the TEXT column compares
/// and orders chronologically.
pub(crate) fn to_utc_second(at: OffsetDateTime) -> OffsetDateTime {
    let utc = at.to_offset(UtcOffset::UTC);
    utc.replace_nanosecond(0).unwrap_or(utc)
}

pub async fn insert(db: &SqlitePool, new: NewFoodEntry) -> Result<FoodEntry, StoreError> {
    let created_at = to_utc_second(new.created_at.unwrap_or_else(OffsetDateTime::now_utc));
    let row = sqlx::query_as::<_, FoodEntry>(
        r#"
        INSERT INTO food_entries (name, calories, protein, fat, carbs, fiber, tags, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, name, calories, protein, fat, carbs, fiber, tags, created_at
        "#,
    )
    .bind(&new.name)
    .bind(new.calories)
    .bind(new.protein)
    .bind(new.fat)
    .bind(new.carbs)
    .bind(new.fiber)
    .bind(&new.tags)
    .bind(created_at)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_all(db: &SqlitePool) -> Result<Vec<FoodEntry>, StoreError> {
    let rows = sqlx::query_as::<_, FoodEntry>(
        r#"
        SELECT id, name, calories, protein, fat, carbs, fiber, tags, created_at
        FROM food_entries
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Entries whose `created_at` falls on the given UTC calendar date,
/// oldest first.
pub async fn list_by_date(db: &SqlitePool, date: Date) -> Result<Vec<FoodEntry>, StoreError> {
    let rows = sqlx::query_as::<_, FoodEntry>(
        r#"
        SELECT id, name, calories, protein, fat, carbs, fiber, tags, created_at
        FROM food_entries
        WHERE date(created_at) = ?
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(date)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn delete_by_id(db: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM food_entries WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
