use anyhow::{bail, Context, Result};

use crate::auth::store::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL_MINUTES};
use crate::matching::scorer::ScoringMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scoring_mode: ScoringMode,
    pub seed_demo_data: bool,
    pub admin_username: String,
    pub session_ttl_minutes: i64,
    pub max_sessions: usize,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring_mode: std::env::var("MATCH_SCORING")
                .unwrap_or_else(|_| "occurrence".to_string())
                .parse::<ScoringMode>()
                .context("MATCH_SCORING must be 'occurrence' or 'distinct'")?,
            seed_demo_data: parse_bool(
                "SEED_DEMO_DATA",
                &std::env::var("SEED_DEMO_DATA").unwrap_or_else(|_| "true".to_string()),
            )?,
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_MINUTES.to_string())
                .parse::<i64>()
                .ok()
                .filter(|m| *m > 0)
                .context("SESSION_TTL_MINUTES must be a positive number of minutes")?,
            max_sessions: std::env::var("MAX_SESSIONS")
                .unwrap_or_else(|_| DEFAULT_MAX_SESSIONS.to_string())
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .context("MAX_SESSIONS must be a positive integer")?,
            cors_allowed_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            scoring_mode: ScoringMode::Occurrence,
            seed_demo_data: true,
            admin_username: "admin".to_string(),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("Environment variable '{key}' must be a boolean, got '{other}'"),
    }
}
