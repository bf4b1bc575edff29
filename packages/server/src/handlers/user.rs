use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::auth::AuthUser;
use crate::models::user::UserResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    operation_id = "getCurrentUser",
    summary = "Get the signed-in user",
    description = "Syncs the user record from the session claims and returns it. Returns `null` without a valid session.",
    responses(
        (status = 200, description = "The current user, or null", body = Option<UserResponse>),
    ),
    security((), ("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn current_user(
    auth_user: Option<AuthUser>,
    State(state): State<AppState>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let Some(auth_user) = auth_user else {
        return Ok(Json(None));
    };
    let user = state.storage.upsert_user(&auth_user.profile).await?;
    Ok(Json(Some(user.into())))
}
