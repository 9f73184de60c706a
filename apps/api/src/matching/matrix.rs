use serde::Serialize;

use crate::matching::scorer::MatchScorer;
use crate::models::{Employee, JobRole};

/// Fixed chart palette. Series colour is keyed by job-role id so a given role
/// keeps its colour across renders.
const SERIES_PALETTE: &[&str] = &[
    "#2563eb", "#db2777", "#16a34a", "#ea580c", "#7c3aed", "#0891b2", "#ca8a04", "#dc2626",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchCell {
    pub job_role_id: u32,
    pub title: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchRow {
    pub employee_id: u32,
    pub name: String,
    pub scores: Vec<MatchCell>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSeries {
    pub job_role_id: u32,
    pub title: String,
    pub color: &'static str,
}

/// One row per employee, one cell per job role, both in registry order.
pub fn build_match_matrix(
    employees: &[Employee],
    job_roles: &[JobRole],
    scorer: &dyn MatchScorer,
) -> Vec<MatchRow> {
    employees
        .iter()
        .map(|employee| MatchRow {
            employee_id: employee.id,
            name: employee.name.clone(),
            scores: job_roles
                .iter()
                .map(|job| MatchCell {
                    job_role_id: job.id,
                    title: job.title.clone(),
                    score: scorer.score(&employee.skills, &job.required_skills),
                })
                .collect(),
        })
        .collect()
}

pub fn chart_series(job_roles: &[JobRole]) -> Vec<ChartSeries> {
    job_roles
        .iter()
        .map(|job| ChartSeries {
            job_role_id: job.id,
            title: job.title.clone(),
            color: series_color(job.id),
        })
        .collect()
}

pub fn series_color(job_role_id: u32) -> &'static str {
    // ids start at 1
    let index = (job_role_id.saturating_sub(1) as usize) % SERIES_PALETTE.len();
    SERIES_PALETTE[index]
}
