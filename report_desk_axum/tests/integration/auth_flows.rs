/// Sign-up, login and logout over HTTP
use http::{Method, StatusCode};
use serde_json::json;

use crate::common::{TEST_PASSWORD, TestApp, sign_up_admin, sign_up_user};

#[tokio::test]
#[serial_test::serial]
async fn test_sign_up_returns_user_and_session() {
    let app = TestApp::start().await;

    // Given a new admin account
    let admin = sign_up_admin(&app).await;

    // When the session is used
    let response = app.get("/authority", Some(&admin.cookie)).await;

    // Then it resolves to the admin of the test authority
    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["users"].as_array().expect("users array");
    assert!(users.iter().any(|u| u == &json!(admin.id)));
}

#[tokio::test]
#[serial_test::serial]
async fn test_sign_up_response_hides_password_hash() {
    let app = TestApp::start().await;

    let response = app
        .post(
            "/sign-up",
            None,
            json!({
                "username": format!("hidden-{}", uuid::Uuid::new_v4().simple()),
                "email": format!("hidden-{}@email.com", uuid::Uuid::new_v4().simple()),
                "password": TEST_PASSWORD,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("password_hash").is_none());
    assert!(response.body.get("password").is_none());
    assert_eq!(response.body["access_level"], "user");
}

#[tokio::test]
#[serial_test::serial]
async fn test_duplicate_sign_up_is_conflict() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    let response = app
        .post(
            "/sign-up",
            None,
            json!({
                "username": user.username,
                "email": format!("other-{}", user.email),
                "password": TEST_PASSWORD,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.error_message().is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn test_sign_up_missing_fields_is_bad_request() {
    let app = TestApp::start().await;

    let response = app
        .post("/sign-up", None, json!({ "username": "nobody" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn test_sign_up_unknown_authority_is_bad_request() {
    let app = TestApp::start().await;

    let response = app
        .post(
            "/sign-up",
            None,
            json!({
                "username": format!("lost-{}", uuid::Uuid::new_v4().simple()),
                "email": format!("lost-{}@email.com", uuid::Uuid::new_v4().simple()),
                "password": TEST_PASSWORD,
                "access_level": "admin",
                "authority": "no-such-authority",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial_test::serial]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::start().await;

    let request = http::Request::builder()
        .method(Method::POST)
        .uri("/sign-up")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .expect("request");
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_by_username_and_email() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    let by_username = app
        .post(
            "/login",
            None,
            json!({ "username": user.username, "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(by_username.status, StatusCode::OK);
    assert_eq!(by_username.body["id"], user.id.as_str());
    assert!(by_username.session_cookie().is_some());

    let by_email = app
        .post(
            "/login",
            None,
            json!({ "email": user.email, "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(by_email.status, StatusCode::OK);
    assert_eq!(by_email.body["id"], user.id.as_str());
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    let response = app
        .post(
            "/login",
            None,
            json!({ "username": user.username, "password": "wrong-password" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.session_cookie().is_none());
    assert!(response.error_message().is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn test_logout_invalidates_session() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    // Given a working session
    assert_eq!(
        app.get("/reports", Some(&user.cookie)).await.status,
        StatusCode::OK
    );

    // When the user logs out
    let response = app
        .request(Method::POST, "/logout", Some(&user.cookie), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));
    let expiring = response
        .headers
        .get(http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("expiring cookie");
    assert!(expiring.contains("Max-Age=-86400"));

    // Then the old cookie no longer authenticates
    let response = app.get("/reports", Some(&user.cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial_test::serial]
async fn test_logout_without_session_succeeds() {
    let app = TestApp::start().await;

    let response = app.request(Method::POST, "/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));
}
