use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use indexmap::IndexMap;
use tracing::{instrument, warn};

use crate::entries::dto::{CreateEntriesRequest, CreatedEntriesResponse, IngredientItem, ListParams};
use crate::entries::repo::{self, FoodEntry, NewFoodEntry};
use crate::error::ApiError;
use crate::grouping;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries).post(create_entries))
        .route("/entries/history", get(entry_history))
        .route("/entries/:id", delete(delete_entry))
}

/// Analyzes the submitted ingredient lines and stores one entry per
/// parseable ingredient. A failed analysis call stores nothing.
#[instrument(skip(state, body))]
pub async fn create_entries(
    State(state): State<AppState>,
    Json(body): Json<CreateEntriesRequest>,
) -> Result<(StatusCode, Json<CreatedEntriesResponse>), ApiError> {
    if body.items.is_empty() {
        return Err(ApiError::BadRequest("items must be non-empty".into()));
    }

    let lines: Vec<String> = body.items.iter().map(IngredientItem::to_line).collect();
    let report = state
        .nutrition
        .analyze(&lines)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    let mut entries = Vec::new();
    let mut warnings = Vec::new();
    for (line, ingredient) in lines.iter().zip(&report.ingredients) {
        let Some(parsed) = ingredient.parsed.first() else {
            warn!(%line, "nutrition api could not parse ingredient");
            warnings.push(format!("could not parse \"{line}\"; skipped"));
            continue;
        };
        let nutrients = &parsed.nutrients;
        let entry = repo::insert(
            &state.db,
            NewFoodEntry {
                name: line.clone(),
                calories: nutrients.energy.as_ref().map(|n| n.quantity),
                protein: nutrients.protein.as_ref().map(|n| n.quantity),
                fat: nutrients.fat.as_ref().map(|n| n.quantity),
                carbs: nutrients.carbs.as_ref().map(|n| n.quantity),
                fiber: nutrients.fiber.as_ref().map(|n| n.quantity),
                tags: body.tags.clone(),
                created_at: None,
            },
        )
        .await?;
        entries.push(entry);
    }
    for line in lines.iter().skip(report.ingredients.len()) {
        warn!(%line, "nutrition api returned no analysis for ingredient");
        warnings.push(format!("no analysis returned for \"{line}\"; skipped"));
    }

    Ok((
        StatusCode::CREATED,
        Json(CreatedEntriesResponse { entries, warnings }),
    ))
}

/// Flat list, newest first; `?date=YYYY-MM-DD` narrows to that day,
/// oldest first.
#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FoodEntry>>, ApiError> {
    let entries = match params.date {
        Some(date) => repo::list_by_date(&state.db, date).await?,
        None => repo::list_all(&state.db).await?,
    };
    Ok(Json(entries))
}

#[instrument(skip(state))]
pub async fn entry_history(
    State(state): State<AppState>,
) -> Result<Json<IndexMap<String, Vec<FoodEntry>>>, ApiError> {
    let entries = repo::list_all(&state.db).await?;
    Ok(Json(grouping::group_by_date(entries)))
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    repo::delete_by_id(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
