use async_trait::async_trait;
use http::HeaderMap;

use crate::authority::AuthorityStore;
use crate::coordination::CoordinationError;
use crate::session::{
    SessionError, create_new_session_with_uid, get_user_from_session, prepare_logout_response,
};
use crate::userdb::{AccessLevel, User, UserSearchField, UserStore};

use super::config::{ALLOW_PRIVILEGED_SIGN_UP, PASSWORD_MIN_LENGTH};
use super::password::{hash_password, verify_password};
use super::types::{Caller, LoginRequest, SessionGrant, SignUpRequest};

/// Authenticates users and resolves session ids into callers
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account and open a session for it
    async fn sign_up(&self, request: SignUpRequest) -> Result<SessionGrant, CoordinationError>;

    /// Check credentials and open a session
    async fn login(&self, request: LoginRequest) -> Result<SessionGrant, CoordinationError>;

    /// Resolve a session id into the caller it belongs to.
    ///
    /// Missing, expired or orphaned sessions yield `CoordinationError::Unauthenticated`.
    async fn current_caller(&self, session_id: &str) -> Result<Caller, CoordinationError>;

    /// End the session and return headers that expire the cookie
    async fn logout(&self, session_id: Option<&str>) -> Result<HeaderMap, CoordinationError>;
}

/// Identity provider backed by the user store and cache-stored sessions
#[derive(Debug, Clone, Copy)]
pub struct SessionIdentityProvider {
    allow_privileged_sign_up: bool,
}

impl SessionIdentityProvider {
    /// Provider configured from `ALLOW_PRIVILEGED_SIGN_UP`
    pub fn new() -> Self {
        Self::with_privileged_sign_up(*ALLOW_PRIVILEGED_SIGN_UP)
    }

    /// When `allowed` is false, sign-up requests for `access_level: "admin"` are rejected
    pub fn with_privileged_sign_up(allowed: bool) -> Self {
        Self {
            allow_privileged_sign_up: allowed,
        }
    }
}

impl Default for SessionIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_sign_up(request: &SignUpRequest) -> Result<(), CoordinationError> {
    if request.username.trim().is_empty() {
        return Err(CoordinationError::Validation("username is required".to_string()).log());
    }
    if request.email.trim().is_empty() {
        return Err(CoordinationError::Validation("email is required".to_string()).log());
    }
    if !request.email.contains('@') {
        return Err(CoordinationError::Validation("email is invalid".to_string()).log());
    }
    if request.password.is_empty() {
        return Err(CoordinationError::Validation("password is required".to_string()).log());
    }
    if request.password.chars().count() < *PASSWORD_MIN_LENGTH {
        return Err(CoordinationError::Validation(format!(
            "password must be at least {} characters",
            *PASSWORD_MIN_LENGTH
        ))
        .log());
    }
    Ok(())
}

#[async_trait]
impl IdentityProvider for SessionIdentityProvider {
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    async fn sign_up(&self, request: SignUpRequest) -> Result<SessionGrant, CoordinationError> {
        validate_sign_up(&request)?;

        if request.access_level == Some(AccessLevel::Admin) && !self.allow_privileged_sign_up {
            return Err(CoordinationError::Validation(
                "admin access cannot be requested at sign-up".to_string(),
            )
            .log());
        }

        let authority = request
            .authority
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        if let Some(authority_id) = &authority {
            if AuthorityStore::get_authority(authority_id).await?.is_none() {
                return Err(CoordinationError::Validation(format!(
                    "authority {authority_id} does not exist"
                ))
                .log());
            }
        }

        let id = request
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let password_hash = hash_password(&request.password)?;

        let mut user = User::new(
            id,
            request.username.trim().to_string(),
            request.email.trim().to_string(),
            password_hash,
        );
        user.authority = authority;
        user.access_level = request.access_level.unwrap_or_default();

        let user = UserStore::create_user(user).await?;
        let headers = create_new_session_with_uid(&user.id).await?;

        tracing::info!(user_id = %user.id, "User signed up");
        Ok(SessionGrant { user, headers })
    }

    #[tracing::instrument(skip(self, request))]
    async fn login(&self, request: LoginRequest) -> Result<SessionGrant, CoordinationError> {
        let field = match (
            request.username.filter(|u| !u.trim().is_empty()),
            request.email.filter(|e| !e.trim().is_empty()),
        ) {
            (Some(username), _) => UserSearchField::Username(username.trim().to_string()),
            (None, Some(email)) => UserSearchField::Email(email.trim().to_string()),
            (None, None) => {
                return Err(CoordinationError::Validation(
                    "username or email is required".to_string(),
                )
                .log());
            }
        };

        let invalid = || CoordinationError::Authentication("Invalid credentials".to_string()).log();

        let user = UserStore::get_user_by(field).await?.ok_or_else(invalid)?;

        if !verify_password(&request.password, &user.password_hash) {
            return Err(invalid());
        }

        let headers = create_new_session_with_uid(&user.id).await?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(SessionGrant { user, headers })
    }

    async fn current_caller(&self, session_id: &str) -> Result<Caller, CoordinationError> {
        match get_user_from_session(session_id).await {
            Ok(user) => Ok(Caller::from(user)),
            Err(SessionError::SessionError | SessionError::SessionExpiredError) => {
                Err(CoordinationError::Unauthenticated.log())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn logout(&self, session_id: Option<&str>) -> Result<HeaderMap, CoordinationError> {
        Ok(prepare_logout_response(session_id).await?)
    }
}
