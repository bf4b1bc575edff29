use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(content_routes())
        .merge(interview_routes())
        .routes(routes!(handlers::submission::list_submissions))
        .routes(routes!(handlers::user::current_user))
}

fn content_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::pattern::list_patterns))
        .routes(routes!(handlers::pattern::get_pattern))
        .routes(routes!(handlers::pattern::list_pattern_problems))
        .routes(routes!(handlers::problem::get_problem))
        .routes(routes!(handlers::problem::submit_code))
}

fn interview_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::interview::create_interview,
            handlers::interview::list_interviews
        ))
        .routes(routes!(handlers::interview::get_interview))
        .routes(routes!(handlers::interview::submit_interview))
        .routes(routes!(handlers::interview::analyze_interview))
}
