//! Axum route handlers for the Auth API.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::session::PasswordResetNotice;
use crate::auth::SessionContext;
use crate::errors::AppError;
use crate::extract::{ApiJson, AuthSession};
use crate::models::User;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: Uuid,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
    pub can_edit: bool,
    pub logged_in_at: Option<DateTime<Utc>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Session resolution
// ────────────────────────────────────────────────────────────────────────────

/// Reads `Authorization: Bearer <uuid>`. The scheme is case-insensitive;
/// malformed headers count as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    token.trim().parse().ok()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = SessionContext::new();
    let user = session
        .login(
            state.authenticator.as_ref(),
            &request.username,
            &request.password,
        )
        .await?;
    let token = state.sessions.insert(session).await;
    Ok(Json(SessionResponse { token, user }))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = SessionContext::new();
    let user = session
        .register(
            state.authenticator.as_ref(),
            &request.username,
            &request.password,
            &request.confirm_password,
        )
        .await?;
    let token = state.sessions.insert(session).await;
    Ok(Json(SessionResponse { token, user }))
}

/// POST /api/v1/auth/password-reset
pub async fn handle_password_reset(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PasswordResetRequest>,
) -> Result<Json<PasswordResetNotice>, AppError> {
    let notice =
        SessionContext::request_password_reset(state.authenticator.as_ref(), &request.email)
            .await?;
    Ok(Json(notice))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.end(token).await;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn handle_me(AuthSession(session): AuthSession) -> Result<Json<MeResponse>, AppError> {
    let user = session
        .current_user()
        .cloned()
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(MeResponse {
        user,
        can_edit: session.can_edit(),
        logged_in_at: session.logged_in_at(),
    }))
}
