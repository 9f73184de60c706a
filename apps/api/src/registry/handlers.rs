use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::{ApiJson, AuthSession};
use crate::models::{Employee, JobRole};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewEmployeeRequest {
    pub name: String,
    /// Comma-separated skill list.
    pub skills: String,
}

#[derive(Debug, Deserialize)]
pub struct NewJobRoleRequest {
    pub title: String,
    /// Comma-separated required-skill list.
    pub skills: String,
}

/// GET /api/v1/employees
pub async fn handle_list_employees(
    State(state): State<AppState>,
    AuthSession(_): AuthSession,
) -> Result<Json<Vec<Employee>>, AppError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.employees().to_vec()))
}

/// POST /api/v1/employees
pub async fn handle_add_employee(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ApiJson(req): ApiJson<NewEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let employee = state
        .registry
        .write()
        .await
        .add_employee(&session, &req.name, &req.skills)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/job-roles
pub async fn handle_list_job_roles(
    State(state): State<AppState>,
    AuthSession(_): AuthSession,
) -> Result<Json<Vec<JobRole>>, AppError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.job_roles().to_vec()))
}

/// POST /api/v1/job-roles
pub async fn handle_add_job_role(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ApiJson(req): ApiJson<NewJobRoleRequest>,
) -> Result<(StatusCode, Json<JobRole>), AppError> {
    let job_role = state
        .registry
        .write()
        .await
        .add_job_role(&session, &req.title, &req.skills)?;
    Ok((StatusCode::CREATED, Json(job_role)))
}
