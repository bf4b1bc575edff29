use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::entity::problem;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::grading::Grader;
use crate::models::problem::*;
use crate::state::AppState;
use crate::storage::Storage;

/// Find a problem by ID or return 404.
async fn find_problem(storage: &dyn Storage, id: i32) -> Result<problem::Model, AppError> {
    storage
        .get_problem(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Problem not found".into()))
}

#[utoipa::path(
    get,
    path = "/problems/{id}",
    tag = "Problems",
    operation_id = "getProblem",
    summary = "Get a problem by ID",
    description = "Returns the full problem, including starter code and declared test cases.",
    params(("id" = i32, Path, description = "Problem ID")),
    responses(
        (status = 200, description = "Problem details", body = ProblemResponse),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProblemResponse>, AppError> {
    let model = find_problem(state.storage.as_ref(), id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    post,
    path = "/problems/{id}/submit",
    tag = "Problems",
    operation_id = "submitCode",
    summary = "Grade code against a problem",
    description = "Runs the code against the problem's test cases and returns a verdict. Anonymous callers get the verdict only; signed-in callers also get the submission stored and its ID returned.",
    params(("id" = i32, Path, description = "Problem ID")),
    request_body = SubmitCodeRequest,
    responses(
        (status = 200, description = "Verdict", body = SubmitCodeResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
    ),
    security((), ("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id, language = %payload.language))]
pub async fn submit_code(
    auth_user: Option<AuthUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<SubmitCodeRequest>,
) -> Result<Json<SubmitCodeResponse>, AppError> {
    validate_submit_code(&payload)?;

    let problem = find_problem(state.storage.as_ref(), id).await?;

    let outcome = Grader::new(state.storage.as_ref(), state.evaluator.as_ref())
        .grade(
            &problem,
            auth_user.as_ref().map(|u| &u.profile),
            payload.language.trim(),
            &payload.code,
        )
        .await?;

    Ok(Json(SubmitCodeResponse {
        verdict: outcome.verdict,
        submission_id: outcome.submission_id,
    }))
}
