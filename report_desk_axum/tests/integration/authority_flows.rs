/// Authority-scoped report management
///
/// Only an admin of the report's authority may read, update or delete it.
/// The `{authority}` segment of the legacy paths never grants access.
use http::StatusCode;
use serde_json::json;

use crate::common::{
    OTHER_AUTHORITY_ID, TEST_AUTHORITY_ID, TEST_AUTHORITY_NAME, TestApp, create_report,
    sign_up_admin, sign_up_member, sign_up_user,
};

#[tokio::test]
#[serial_test::serial]
async fn test_admin_reads_report_of_own_authority() {
    let app = TestApp::start().await;
    let admin = sign_up_admin(&app).await;
    let user = sign_up_user(&app).await;
    let report = create_report(&app, &user, TEST_AUTHORITY_ID).await;
    let report_id = report["id"].as_str().expect("report id");

    // Admin of the authority gets the report
    let response = app
        .get(&format!("/authority/reports/{report_id}"), Some(&admin.cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], report_id);
    assert_eq!(response.body["title"], report["title"]);

    // A plain user is rejected with an error body
    let response = app
        .get(&format!("/authority/reports/{report_id}"), Some(&user.cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error_message().is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn test_member_without_admin_rights_is_rejected() {
    let app = TestApp::start().await;
    let member = sign_up_member(&app).await;

    let response = app.get("/authority/reports", Some(&member.cookie)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial_test::serial]
async fn test_list_authority_reports_is_scoped() {
    let app = TestApp::start().await;
    let admin = sign_up_admin(&app).await;
    let user = sign_up_user(&app).await;

    let inside = create_report(&app, &user, TEST_AUTHORITY_ID).await;
    let outside = create_report(&app, &user, OTHER_AUTHORITY_ID).await;

    let response = app.get("/authority/reports", Some(&admin.cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    let reports = response.body.as_array().expect("array");

    assert!(reports.iter().all(|r| r["authority"] == TEST_AUTHORITY_ID));
    assert!(reports.iter().any(|r| r["id"] == inside["id"]));
    assert!(!reports.iter().any(|r| r["id"] == outside["id"]));

    let response = app.get("/authority/reports", Some(&user.cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_then_get() {
    let app = TestApp::start().await;
    let admin = sign_up_admin(&app).await;
    let user = sign_up_user(&app).await;
    let report = create_report(&app, &user, TEST_AUTHORITY_ID).await;
    let report_id = report["id"].as_str().expect("report id");

    // When the admin replaces the details
    let response = app
        .put(
            &format!("/authority/reports/{report_id}"),
            Some(&admin.cookie),
            json!({ "details": "new details" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["details"], "new details");

    // Then a later read sees them
    let response = app
        .get(&format!("/authority/reports/{report_id}"), Some(&admin.cookie))
        .await;
    assert_eq!(response.body["details"], "new details");
    assert_eq!(response.body["title"], report["title"]);
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_requires_details() {
    let app = TestApp::start().await;
    let admin = sign_up_admin(&app).await;
    let report = create_report(&app, &admin, TEST_AUTHORITY_ID).await;
    let report_id = report["id"].as_str().expect("report id");

    let response = app
        .put(
            &format!("/authority/reports/{report_id}"),
            Some(&admin.cookie),
            json!({}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial_test::serial]
async fn test_user_on_named_authority_path_is_rejected() {
    let app = TestApp::start().await;
    let user = sign_up_user(&app).await;
    let report = create_report(&app, &user, TEST_AUTHORITY_ID).await;
    let report_id = report["id"].as_str().expect("report id");
    let path = format!("/authority/{TEST_AUTHORITY_NAME}/reports/{report_id}");

    let response = app
        .put(&path, Some(&user.cookie), json!({ "details": "new details" }))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error_message().is_some());

    let response = app.delete(&path, Some(&user.cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial_test::serial]
async fn test_path_segment_does_not_grant_access() {
    let app = TestApp::start().await;
    let admin = sign_up_admin(&app).await;
    let user = sign_up_user(&app).await;

    // A report outside the admin's authority stays out of reach
    let foreign = create_report(&app, &user, OTHER_AUTHORITY_ID).await;
    let foreign_id = foreign["id"].as_str().expect("report id");
    let response = app
        .put(
            &format!("/authority/{OTHER_AUTHORITY_ID}/reports/{foreign_id}"),
            Some(&admin.cookie),
            json!({ "details": "hijacked" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // A report inside it is reachable whatever the segment says
    let own = create_report(&app, &user, TEST_AUTHORITY_ID).await;
    let own_id = own["id"].as_str().expect("report id");
    let response = app
        .get(
            &format!("/authority/whatever/reports/{own_id}"),
            Some(&admin.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], own_id);
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::start().await;
    let admin = sign_up_admin(&app).await;
    let user = sign_up_user(&app).await;
    let report = create_report(&app, &user, TEST_AUTHORITY_ID).await;
    let report_id = report["id"].as_str().expect("report id");
    let uri = format!("/authority/reports/{report_id}");

    let response = app.delete(&uri, Some(&admin.cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let response = app.get(&uri, Some(&admin.cookie)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.error_message().is_some());

    // Deleting again is not a success
    let response = app.delete(&uri, Some(&admin.cookie)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_authority_lists_members_and_reports() {
    let app = TestApp::start().await;
    let admin = sign_up_admin(&app).await;
    let member = sign_up_member(&app).await;
    let report = create_report(&app, &member, TEST_AUTHORITY_ID).await;

    let response = app.get("/authority", Some(&admin.cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], TEST_AUTHORITY_ID);
    assert_eq!(response.body["name"], TEST_AUTHORITY_NAME);

    let users = response.body["users"].as_array().expect("users");
    assert!(users.iter().any(|u| u == &json!(admin.id)));
    assert!(users.iter().any(|u| u == &json!(member.id)));

    let reports = response.body["reports"].as_array().expect("reports");
    assert!(reports.iter().any(|r| r == &report["id"]));

    let response = app.get("/authority", Some(&member.cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
