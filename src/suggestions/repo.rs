use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::{Date, OffsetDateTime};

use crate::entries::repo::to_utc_second;
use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Suggestion {
    pub id: i64,
    pub date: Date,
    pub special_request: Option<String>,
    pub generated_text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewSuggestion {
    pub date: Date,
    pub special_request: Option<String>,
    pub generated_text: String,
    /// Defaults to the current time when absent.
    pub created_at: Option<OffsetDateTime>,
}

pub async fn insert(db: &SqlitePool, new: NewSuggestion) -> Result<Suggestion, StoreError> {
    let created_at = to_utc_second(new.created_at.unwrap_or_else(OffsetDateTime::now_utc));
    let row = sqlx::query_as::<_, Suggestion>(
        r#"
        INSERT INTO suggestions (date, special_request, generated_text, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, date, special_request, generated_text, created_at
        "#,
    )
    .bind(new.date)
    .bind(&new.special_request)
    .bind(&new.generated_text)
    .bind(created_at)
    .fetch_one(db)
    .await?;
    Ok(row)
}
