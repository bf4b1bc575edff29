use serde_json::Value;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn anonymous_user_is_null() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(routes::USER).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body, Value::Null);
    assert_eq!(res.text, "null");
}

#[tokio::test]
async fn signed_in_user_is_synced_from_claims() {
    let app = TestApp::spawn().await;
    let token = app.token_for("carol");

    let res = app.get_with_token(routes::USER, &token).await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["id"], "carol");
    assert_eq!(res.body["email"], "carol@example.com");
    assert_eq!(res.body["firstName"], "Test");
    assert!(res.body["lastName"].is_null());

    let again = app.get_with_token(routes::USER, &token).await;
    assert_eq!(again.body["createdAt"], res.body["createdAt"]);
}
