use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::state::AppState;
use crate::storage::UserProfile;
use crate::utils::jwt;

/// Authenticated user extracted from the session cookie or an
/// `Authorization: Bearer <token>` header.
///
/// Add this as a handler parameter to require authentication, or take
/// `Option<AuthUser>` where anonymous access is allowed.
pub struct AuthUser {
    pub user_id: String,
    pub profile: UserProfile,
}

impl From<jwt::Claims> for AuthUser {
    fn from(claims: jwt::Claims) -> Self {
        let profile = UserProfile::from(claims);
        Self {
            user_id: profile.id.clone(),
            profile,
        }
    }
}

fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
    {
        return Some(header.strip_prefix("Bearer ").unwrap_or(header).to_string());
    }

    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            session_token(parts, &state.config.auth.cookie_name).ok_or(AppError::TokenMissing)?;

        let claims = jwt::verify(&token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        Ok(AuthUser::from(claims))
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        let user = <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state).await;
        Ok(user.ok())
    }
}
