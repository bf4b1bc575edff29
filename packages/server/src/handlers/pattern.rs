use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::entity::pattern;
use crate::error::{AppError, ErrorBody};
use crate::models::pattern::PatternResponse;
use crate::models::problem::ProblemResponse;
use crate::state::AppState;
use crate::storage::Storage;

/// Find a pattern by ID or return 404.
async fn find_pattern(storage: &dyn Storage, id: i32) -> Result<pattern::Model, AppError> {
    storage
        .get_pattern(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pattern not found".into()))
}

#[utoipa::path(
    get,
    path = "/patterns",
    tag = "Patterns",
    operation_id = "listPatterns",
    summary = "List all patterns",
    description = "Returns every pattern in the library, ordered by ID.",
    responses(
        (status = 200, description = "All patterns", body = Vec<PatternResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_patterns(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatternResponse>>, AppError> {
    let patterns = state.storage.list_patterns().await?;
    Ok(Json(patterns.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/patterns/{id}",
    tag = "Patterns",
    operation_id = "getPattern",
    summary = "Get a pattern by ID",
    params(("id" = i32, Path, description = "Pattern ID")),
    responses(
        (status = 200, description = "Pattern details", body = PatternResponse),
        (status = 404, description = "Pattern not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_pattern(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PatternResponse>, AppError> {
    let model = find_pattern(state.storage.as_ref(), id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/patterns/{id}/problems",
    tag = "Patterns",
    operation_id = "listPatternProblems",
    summary = "List the problems of a pattern",
    description = "Returns the problems that practice the pattern, ordered by ID. An unknown pattern has no problems.",
    params(("id" = i32, Path, description = "Pattern ID")),
    responses(
        (status = 200, description = "Problems of the pattern", body = Vec<ProblemResponse>),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn list_pattern_problems(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ProblemResponse>>, AppError> {
    let problems = state.storage.list_problems_for_pattern(id).await?;
    Ok(Json(problems.into_iter().map(Into::into).collect()))
}
