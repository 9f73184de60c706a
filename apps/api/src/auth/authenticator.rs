//! Authenticator — the seam a real identity backend plugs into.
//!
//! Default: `PlaceholderAuthenticator`, which never checks a password and grants
//! the admin role to exactly one configured username.
//!
//! `AppState` holds an `Arc<dyn Authenticator>`.

use async_trait::async_trait;
use tracing::info;

use crate::auth::AuthError;
use crate::models::Role;

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verifies credentials and returns the role to grant.
    async fn verify(&self, username: &str, password: &str) -> Result<Role, AuthError>;

    /// Creates an account and returns the role to grant.
    async fn register(&self, username: &str, password: &str) -> Result<Role, AuthError>;

    /// Dispatches a password reset link to `email`.
    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

/// Stand-in until a real identity backend exists. Nothing is stored or sent.
pub struct PlaceholderAuthenticator {
    admin_username: String,
}

impl PlaceholderAuthenticator {
    pub fn new(admin_username: impl Into<String>) -> Self {
        Self {
            admin_username: admin_username.into(),
        }
    }
}

impl Default for PlaceholderAuthenticator {
    fn default() -> Self {
        Self::new("admin")
    }
}

#[async_trait]
impl Authenticator for PlaceholderAuthenticator {
    async fn verify(&self, username: &str, _password: &str) -> Result<Role, AuthError> {
        if username == self.admin_username {
            Ok(Role::Admin)
        } else {
            Ok(Role::Employee)
        }
    }

    async fn register(&self, _username: &str, _password: &str) -> Result<Role, AuthError> {
        Ok(Role::Employee)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        info!("Password reset requested for {email} (placeholder: nothing sent)");
        Ok(())
    }
}
