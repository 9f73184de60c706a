use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::{AuthError, Authenticator};
use crate::models::{Role, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(User),
}

/// One client's view of who is logged in. Passed explicitly to whatever needs
/// an authorization decision; there is no ambient current user.
#[derive(Debug, Clone)]
pub struct SessionContext {
    state: SessionState,
    logged_in_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PasswordResetNotice {
    pub email: String,
    pub message: String,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: SessionState::LoggedOut,
            logged_in_at: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::LoggedIn(user) => Some(user),
            SessionState::LoggedOut => None,
        }
    }

    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.logged_in_at
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    /// Authorization gate for registry appends.
    pub fn can_edit(&self) -> bool {
        self.current_user().is_some_and(User::is_admin)
    }

    pub async fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        username: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let role = authenticator.verify(username, password).await?;
        Ok(self.enter(username, role))
    }

    /// Stays logged out on any validation failure.
    pub async fn register(
        &mut self,
        authenticator: &dyn Authenticator,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, AuthError> {
        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        if password != confirm_password {
            warn!("Registration for {username} rejected: passwords do not match");
            return Err(AuthError::PasswordMismatch);
        }

        let role = authenticator.register(username, password).await?;
        Ok(self.enter(username, role))
    }

    /// Needs no session and changes none; only a confirmation for the caller to show.
    pub async fn request_password_reset(
        authenticator: &dyn Authenticator,
        email: &str,
    ) -> Result<PasswordResetNotice, AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }

        authenticator.send_password_reset(email).await?;
        Ok(PasswordResetNotice {
            email: email.to_string(),
            message: format!("A password reset link has been sent to {email}."),
        })
    }

    pub fn logout(&mut self) {
        if let SessionState::LoggedIn(user) = &self.state {
            info!("User {} logged out", user.username);
        }
        self.state = SessionState::LoggedOut;
        self.logged_in_at = None;
    }

    fn enter(&mut self, username: &str, role: Role) -> User {
        let user = User {
            username: username.to_string(),
            role,
        };
        info!("User {} logged in as {:?}", user.username, user.role);
        self.state = SessionState::LoggedIn(user.clone());
        self.logged_in_at = Some(Utc::now());
        user
    }
}
