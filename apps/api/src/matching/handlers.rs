use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::AuthSession;
use crate::matching::matrix::{build_match_matrix, chart_series, ChartSeries, MatchRow};
use crate::matching::scorer::ScoringMode;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchMatrixResponse {
    pub rows: Vec<MatchRow>,
    pub series: Vec<ChartSeries>,
    pub scorer: ScoringMode,
}

/// GET /api/v1/matches
///
/// Scores every employee against every job role for the bar chart.
pub async fn handle_match_matrix(
    State(state): State<AppState>,
    AuthSession(_): AuthSession,
) -> Result<Json<MatchMatrixResponse>, AppError> {
    let registry = state.registry.read().await;
    let rows = build_match_matrix(
        registry.employees(),
        registry.job_roles(),
        state.scorer.as_ref(),
    );
    let series = chart_series(registry.job_roles());

    Ok(Json(MatchMatrixResponse {
        rows,
        series,
        scorer: state.scorer.mode(),
    }))
}
