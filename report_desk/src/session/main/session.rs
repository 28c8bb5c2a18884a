use chrono::{Duration, Utc};
use http::header::HeaderMap;

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::session::types::StoredSession;
use crate::utils::{gen_random_string, header_set_cookie};

use crate::storage::GENERIC_CACHE_STORE;
use crate::userdb::{User, UserStore};

const SESSION_PREFIX: &str = "session";

/// Prepare a logout response by expiring the session cookie and deleting the session from storage
///
/// A missing session id still yields the expiring cookie.
pub(crate) async fn prepare_logout_response(
    session_id: Option<&str>,
) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, SESSION_COOKIE_NAME.as_str(), "value", -86400)?;

    if let Some(session_id) = session_id {
        delete_session_from_store_by_session_id(session_id).await?;
    }

    Ok(headers)
}

/// Open a session for `user_id` and return the `Set-Cookie` header carrying its id
pub(crate) async fn create_new_session_with_uid(user_id: &str) -> Result<HeaderMap, SessionError> {
    let session_id = gen_random_string(32)?;
    let expires_at = Utc::now() + Duration::seconds(*SESSION_COOKIE_MAX_AGE as i64);

    let stored_session = StoredSession {
        user_id: user_id.to_string(),
        expires_at,
        ttl: *SESSION_COOKIE_MAX_AGE,
    };

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put_with_ttl(
            SESSION_PREFIX,
            &session_id,
            stored_session.try_into()?,
            *SESSION_COOKIE_MAX_AGE as usize,
        )
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &session_id,
        *SESSION_COOKIE_MAX_AGE as i64,
    )?;

    tracing::debug!(user_id = %user_id, "Session created");
    Ok(headers)
}

async fn delete_session_from_store_by_session_id(session_id: &str) -> Result<(), SessionError> {
    GENERIC_CACHE_STORE
        .lock()
        .await
        .remove(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;
    Ok(())
}

/// Resolve a session id to the user it belongs to.
///
/// The user is loaded fresh from the user store, so access level or authority
/// changes take effect on the next request. Expired sessions are removed.
pub(crate) async fn get_user_from_session(session_id: &str) -> Result<User, SessionError> {
    let cached_session = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?
        .ok_or(SessionError::SessionError)?;

    let stored_session: StoredSession = cached_session.try_into()?;

    if stored_session.expires_at < Utc::now() {
        tracing::debug!("Session expired at {}", stored_session.expires_at);
        delete_session_from_store_by_session_id(session_id).await?;
        return Err(SessionError::SessionExpiredError);
    }

    UserStore::get_user(&stored_session.user_id)
        .await?
        .ok_or(SessionError::SessionError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use http::header::SET_COOKIE;
    use serial_test::serial;

    async fn create_user(suffix: &str) -> User {
        let id = format!(
            "session-user-{suffix}-{}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        UserStore::create_user(User::new(
            id.clone(),
            id.clone(),
            format!("{id}@example.com"),
            "hash".to_string(),
        ))
        .await
        .expect("create user")
    }

    fn session_id_from_set_cookie(headers: &HeaderMap) -> String {
        let cookie = headers
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("Set-Cookie header");
        let pair = cookie.split(';').next().expect("cookie pair");
        pair.split_once('=').expect("name=value").1.to_string()
    }

    #[tokio::test]
    #[serial]
    async fn test_session_round_trip_and_logout() {
        init_test_environment().await;
        let user = create_user("roundtrip").await;

        // Given a fresh session
        let headers = create_new_session_with_uid(&user.id).await.expect("session");
        let session_id = session_id_from_set_cookie(&headers);

        // When it is resolved
        let resolved = get_user_from_session(&session_id).await.expect("resolve");

        // Then it yields the stored user
        assert_eq!(resolved.id, user.id);

        // And after logout the session no longer resolves
        let logout_headers = prepare_logout_response(Some(&session_id))
            .await
            .expect("logout");
        let expired = logout_headers
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("expiring cookie");
        assert!(expired.contains("Max-Age=-86400"));
        assert!(matches!(
            get_user_from_session(&session_id).await,
            Err(SessionError::SessionError)
        ));

        let _ = UserStore::delete_user(&user.id).await;
    }

    #[tokio::test]
    #[serial]
    async fn test_expired_session_is_rejected() {
        init_test_environment().await;
        let user = create_user("expired").await;

        // Given a session whose expiry lies in the past but is still cached
        let session_id = "expired-session-id";
        let stored = StoredSession {
            user_id: user.id.clone(),
            expires_at: Utc::now() - Duration::seconds(5),
            ttl: 60,
        };
        GENERIC_CACHE_STORE
            .lock()
            .await
            .put_with_ttl(SESSION_PREFIX, session_id, stored.try_into().unwrap(), 60)
            .await
            .unwrap();

        // Then resolving it fails and removes it
        assert!(matches!(
            get_user_from_session(session_id).await,
            Err(SessionError::SessionExpiredError)
        ));
        assert!(matches!(
            get_user_from_session(session_id).await,
            Err(SessionError::SessionError)
        ));

        let _ = UserStore::delete_user(&user.id).await;
    }

    #[tokio::test]
    #[serial]
    async fn test_session_of_deleted_user_is_rejected() {
        init_test_environment().await;
        let user = create_user("deleted").await;

        let headers = create_new_session_with_uid(&user.id).await.expect("session");
        let session_id = session_id_from_set_cookie(&headers);

        UserStore::delete_user(&user.id).await.expect("delete user");

        assert!(matches!(
            get_user_from_session(&session_id).await,
            Err(SessionError::SessionError)
        ));
    }
}
