pub mod analyzer;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod grading;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod storage;
pub mod utils;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pattern Gym API",
        version = "1.0.0",
        description = "Pattern library, code grading and mock interview sessions"
    ),
    tags(
        (name = "Patterns", description = "Read-only pattern library"),
        (name = "Problems", description = "Practice problems and code grading"),
        (name = "Submissions", description = "Stored submissions of the signed-in user"),
        (name = "Interviews", description = "Mock interview sessions and their analysis"),
        (name = "Users", description = "The signed-in user"),
    ),
)]
struct ApiDoc;

/// Security schemes; the cookie name follows `auth.cookie_name`.
struct SecurityAddon<'a> {
    cookie_name: &'a str,
}

impl Modify for SecurityAddon<'_> {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(self.cookie_name))),
        );
    }
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(config.max_age))
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let mut doc = ApiDoc::openapi();
    SecurityAddon {
        cookie_name: &state.config.auth.cookie_name,
    }
    .modify(&mut doc);

    let (router, api) = OpenApiRouter::with_openapi(doc)
        .nest("/api", routes::api_routes())
        .split_for_parts();

    let cors = cors_layer(&state.config.server.cors);
    let body_limit = state.config.server.body_limit_bytes;

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
}
