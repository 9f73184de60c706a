// Session management: pluggable authenticator, per-client session context,
// and the token store the HTTP layer resolves sessions from.

pub mod authenticator;
pub mod handlers;
pub mod session;
pub mod store;

use thiserror::Error;

pub use authenticator::{Authenticator, PlaceholderAuthenticator};
pub use session::SessionContext;
pub use store::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    // Never returned by PlaceholderAuthenticator; reserved for real backends.
    #[allow(dead_code)]
    #[error("Credentials rejected: {0}")]
    Rejected(String),

    #[allow(dead_code)]
    #[error("Authentication backend error: {0}")]
    Backend(String),
}
