use crate::common::{TestApp, routes};

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(routes::OPENAPI).await;
    assert_eq!(res.status, 200);

    let paths = res.body["paths"].as_object().unwrap();
    for path in [
        "/api/patterns",
        "/api/patterns/{id}",
        "/api/patterns/{id}/problems",
        "/api/problems/{id}",
        "/api/problems/{id}/submit",
        "/api/submissions",
        "/api/interviews",
        "/api/interviews/{id}",
        "/api/interviews/{id}/submit",
        "/api/interviews/{id}/analyze",
        "/api/user",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn cookie_scheme_uses_the_configured_name() {
    let app = TestApp::spawn_with(|c| c.auth.cookie_name = "pg_session".to_string()).await;

    let res = app.get_without_token(routes::OPENAPI).await;
    assert_eq!(res.status, 200);

    let scheme = &res.body["components"]["securitySchemes"]["session_cookie"];
    assert_eq!(scheme["type"], "apiKey");
    assert_eq!(scheme["in"], "cookie");
    assert_eq!(scheme["name"], "pg_session");
}
