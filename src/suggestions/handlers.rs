use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::instrument;

use crate::entries::repo as entries_repo;
use crate::error::ApiError;
use crate::grouping;
use crate::state::AppState;
use crate::suggestions::dto::CreateSuggestionRequest;
use crate::suggestions::prompt;
use crate::suggestions::repo::{self, NewSuggestion, Suggestion};

pub fn routes() -> Router<AppState> {
    Router::new().route("/suggestions", post(create_suggestion))
}

/// Generates and stores dietary advice for one day's logged entries.
/// A failed generation call stores nothing.
#[instrument(skip(state, body))]
pub async fn create_suggestion(
    State(state): State<AppState>,
    Json(body): Json<CreateSuggestionRequest>,
) -> Result<(StatusCode, Json<Suggestion>), ApiError> {
    let entries = entries_repo::list_by_date(&state.db, body.date).await?;
    if entries.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "no entries logged for {}",
            body.date
        )));
    }

    let buckets = grouping::group_by_time(entries);
    let messages = prompt::build_messages(body.date, &buckets, body.special_request.as_deref());
    let generated = state
        .advisor
        .generate(&messages)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    let suggestion = repo::insert(
        &state.db,
        NewSuggestion {
            date: body.date,
            special_request: body.special_request,
            generated_text: generated,
            created_at: None,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(suggestion)))
}
