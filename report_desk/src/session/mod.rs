mod config;
mod errors;
mod main;
mod types;

pub use config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
pub use errors::SessionError;
pub(crate) use main::{create_new_session_with_uid, get_user_from_session, prepare_logout_response};
