use http::StatusCode;
use serde_json::{Value, json};

use super::test_app::{TEST_AUTHORITY_ID, TestApp};

pub const TEST_PASSWORD: &str = "password123";

/// A signed-up account and the cookie of its session
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    pub cookie: String,
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

async fn sign_up(app: &TestApp, prefix: &str, extra: Value) -> TestAccount {
    let username = unique(prefix);
    let email = format!("{username}@email.com");

    let mut body = json!({
        "username": username,
        "email": email,
        "password": TEST_PASSWORD,
    });
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        body.extend(extra.clone());
    }

    let response = app.post("/sign-up", None, body).await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "sign-up failed: {:?}",
        response.body
    );

    TestAccount {
        id: response.body["id"]
            .as_str()
            .expect("user id in response")
            .to_string(),
        username,
        email,
        cookie: response.session_cookie().expect("session cookie"),
    }
}

/// Admin of the seeded test authority
pub async fn sign_up_admin(app: &TestApp) -> TestAccount {
    sign_up(
        app,
        "admin",
        json!({ "access_level": "admin", "authority": TEST_AUTHORITY_ID }),
    )
    .await
}

/// Plain user without an authority
pub async fn sign_up_user(app: &TestApp) -> TestAccount {
    sign_up(app, "user", json!({})).await
}

/// Member of the test authority without admin rights
pub async fn sign_up_member(app: &TestApp) -> TestAccount {
    sign_up(app, "member", json!({ "authority": TEST_AUTHORITY_ID })).await
}

/// Submit a report to `authority` and return the created body
pub async fn create_report(app: &TestApp, account: &TestAccount, authority: &str) -> Value {
    let response = app
        .post(
            "/report/new",
            Some(&account.cookie),
            json!({
                "title": "Broken street light",
                "details": "The light on the corner has been out for a week",
                "authority": authority,
            }),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "report creation failed: {:?}",
        response.body
    );
    response.body
}
