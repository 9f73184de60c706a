//! Match Scorer — pluggable, trait-based coverage of a job role's required skills
//! by an employee's skills.
//!
//! Default: `OccurrenceMatchScorer`, which counts every matching tag in the
//! employee's list, so a repeated skill can push the score past 100.
//! Alternative: `DistinctMatchScorer`, which counts each distinct skill once and
//! stays within 0 – 100.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup via `MATCH_SCORING`.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Computes the percentage of `required` covered by `skills`.
///
/// Implementations must be pure and must return `0.0` when `required` is empty.
pub trait MatchScorer: Send + Sync {
    fn score(&self, skills: &[String], required: &[String]) -> f64;

    /// Short backend label surfaced to callers for transparency.
    fn mode(&self) -> ScoringMode;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    Occurrence,
    Distinct,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scoring mode '{0}'")]
pub struct UnknownScoringMode(pub String);

impl FromStr for ScoringMode {
    type Err = UnknownScoringMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "occurrence" => Ok(ScoringMode::Occurrence),
            "distinct" => Ok(ScoringMode::Distinct),
            other => Err(UnknownScoringMode(other.to_string())),
        }
    }
}

impl ScoringMode {
    pub fn scorer(self) -> Box<dyn MatchScorer> {
        match self {
            ScoringMode::Occurrence => Box::new(OccurrenceMatchScorer),
            ScoringMode::Distinct => Box::new(DistinctMatchScorer),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer backends
// ────────────────────────────────────────────────────────────────────────────

/// `100 * |{ s in skills : s ∈ required }| / |required|`, counting occurrences.
pub struct OccurrenceMatchScorer;

impl MatchScorer for OccurrenceMatchScorer {
    fn score(&self, skills: &[String], required: &[String]) -> f64 {
        occurrence_match(skills, required)
    }

    fn mode(&self) -> ScoringMode {
        ScoringMode::Occurrence
    }
}

/// Same ratio, but each distinct skill is counted at most once.
pub struct DistinctMatchScorer;

impl MatchScorer for DistinctMatchScorer {
    fn score(&self, skills: &[String], required: &[String]) -> f64 {
        distinct_match(skills, required)
    }

    fn mode(&self) -> ScoringMode {
        ScoringMode::Distinct
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core ratio
// ────────────────────────────────────────────────────────────────────────────

pub fn occurrence_match(skills: &[String], required: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let matched = skills.iter().filter(|s| required.contains(s)).count();
    percentage(matched, required.len())
}

pub fn distinct_match(skills: &[String], required: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let required_set: HashSet<&str> = required.iter().map(String::as_str).collect();
    let matched: HashSet<&str> = skills
        .iter()
        .map(String::as_str)
        .filter(|s| required_set.contains(s))
        .collect();
    // Duplicates in `required` still count toward the denominator.
    percentage(matched.len(), required.len())
}

fn percentage(matched: usize, total: usize) -> f64 {
    matched as f64 / total as f64 * 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
