//! Sign-up, login and caller resolution

mod config;
mod password;
mod provider;
mod types;

pub use config::{ALLOW_PRIVILEGED_SIGN_UP, PASSWORD_MIN_LENGTH};
pub use provider::{IdentityProvider, SessionIdentityProvider};
pub use types::{Caller, LoginRequest, SessionGrant, SignUpRequest};
