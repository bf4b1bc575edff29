use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::submission::SubmissionResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/submissions",
    tag = "Submissions",
    operation_id = "listMySubmissions",
    summary = "List the caller's submissions",
    description = "Returns the signed-in user's stored submissions, newest first.",
    responses(
        (status = 200, description = "Submissions", body = Vec<SubmissionResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn list_submissions(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let submissions = state
        .storage
        .list_submissions_for_user(&auth_user.user_id)
        .await?;
    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}
