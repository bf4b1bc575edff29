use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::analyzer::Analysis;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::interview::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/interviews",
    tag = "Interviews",
    operation_id = "createInterview",
    summary = "Start an interview session",
    description = "Creates an `in_progress` session for the signed-in user. The session expires after the configured duration.",
    request_body = CreateInterviewRequest,
    responses(
        (status = 201, description = "Interview started", body = InterviewResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = %auth_user.user_id, interview_type = %payload.interview_type))]
pub async fn create_interview(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateInterviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let model = state
        .lifecycle
        .create(&auth_user.profile, payload.interview_type)
        .await?;
    Ok((StatusCode::CREATED, Json(InterviewResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/interviews",
    tag = "Interviews",
    operation_id = "listInterviews",
    summary = "List the caller's interviews",
    description = "Returns the signed-in user's interview sessions, newest first.",
    responses(
        (status = 200, description = "Interviews", body = Vec<InterviewResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn list_interviews(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<InterviewResponse>>, AppError> {
    let interviews = state.lifecycle.list(&auth_user.user_id).await?;
    Ok(Json(interviews.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/interviews/{id}",
    tag = "Interviews",
    operation_id = "getInterview",
    summary = "Get an interview by ID",
    params(("id" = i32, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Interview details", body = InterviewResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Another user's interview (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Interview not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id))]
pub async fn get_interview(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<InterviewResponse>, AppError> {
    let model = state.lifecycle.get(&auth_user.user_id, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    post,
    path = "/interviews/{id}/submit",
    tag = "Interviews",
    operation_id = "submitInterview",
    summary = "Complete an interview session",
    description = "Stores the captured artifacts and moves the session to `completed`. Submitting a completed session returns it unchanged. A session past its deadline is finalized without the artifacts and the request fails with SESSION_EXPIRED.",
    params(("id" = i32, Path, description = "Interview ID")),
    request_body = SubmitInterviewRequest,
    responses(
        (status = 200, description = "Completed interview", body = InterviewResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Another user's interview (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Interview not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Session expired (SESSION_EXPIRED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id))]
pub async fn submit_interview(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<SubmitInterviewRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    validate_submit_interview(&payload)?;

    let model = state
        .lifecycle
        .submit(&auth_user.user_id, id, payload.into())
        .await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    post,
    path = "/interviews/{id}/analyze",
    tag = "Interviews",
    operation_id = "analyzeInterview",
    summary = "Analyze a completed interview",
    description = "Produces feedback and a 0-100 score from the stored artifacts. The first analysis is stored; later calls return it unchanged.",
    params(("id" = i32, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Analysis", body = Analysis),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Another user's interview (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Interview not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Interview not submitted yet (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id))]
pub async fn analyze_interview(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Analysis>, AppError> {
    let analysis = state.lifecycle.analyze(&auth_user.user_id, id).await?;
    Ok(Json(analysis))
}
