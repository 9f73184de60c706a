//! Request extractors that fail with `AppError`, so every rejection uses the
//! JSON error envelope.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::auth::handlers::bearer_token;
use crate::auth::SessionContext;
use crate::errors::AppError;
use crate::state::AppState;

/// JSON body extractor whose rejections map to `AppError::Validation`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// The caller's logged-in session. Rejects with 401 before any body is read.
pub struct AuthSession(pub SessionContext);

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.sessions.resolve(bearer_token(&parts.headers)).await;
        if !session.is_logged_in() {
            return Err(AppError::Unauthorized);
        }
        Ok(AuthSession(session))
    }
}
