/// Report listing and submission for any authenticated caller
use http::StatusCode;
use serde_json::json;

use crate::common::{TEST_AUTHORITY_ID, TestApp, create_report, sign_up_user};

#[tokio::test]
#[serial_test::serial]
async fn test_reports_require_session() {
    let app = TestApp::start().await;

    let response = app.get("/reports", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error_message().is_some());

    let response = app
        .get("/reports", Some("__Host-SessionId=not-a-session"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .post("/report/new", None, json!({ "title": "t", "details": "d" }))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_report_increments_listing() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    // Given the current listing
    let before = app.get("/reports", Some(&user.cookie)).await;
    assert_eq!(before.status, StatusCode::OK);
    let before = before.body.as_array().expect("array").len();

    // When a plain user submits a report
    let report = create_report(&app, &user, TEST_AUTHORITY_ID).await;

    // Then it is authored by them and appears in the listing
    assert_eq!(report["author"], user.id.as_str());
    assert_eq!(report["authority"], TEST_AUTHORITY_ID);
    assert!(report["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(report.get("sequence_number").is_none());

    let after = app.get("/reports", Some(&user.cookie)).await;
    let after = after.body.as_array().expect("array");
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|r| r["id"] == report["id"]));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_report_without_authority() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    let response = app
        .post(
            "/report/new",
            Some(&user.cookie),
            json!({ "title": "Pothole", "details": "Deep one" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["authority"].is_null());
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_report_with_unknown_authority_is_bad_request() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    let response = app
        .post(
            "/report/new",
            Some(&user.cookie),
            json!({ "title": "Lost", "details": "Nowhere to go", "authority": "no-such-authority" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_report_requires_title() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;

    let response = app
        .post(
            "/report/new",
            Some(&user.cookie),
            json!({ "details": "No title here" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().is_some());
}
