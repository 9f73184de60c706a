use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person tracked on the dashboard. Append-only: never edited once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    /// Ordered skill tags. Duplicates are kept as entered.
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}
