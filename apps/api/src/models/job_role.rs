use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A position with the skills it requires. `required_skills` is never empty
/// for a role held by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    pub id: u32,
    pub title: String,
    pub required_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}
