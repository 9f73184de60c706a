use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;

use crate::auth::{Authenticator, PlaceholderAuthenticator, SessionStore};
use crate::config::Config;
use crate::matching::scorer::MatchScorer;
use crate::registry::{seed::demo_registry, Registry};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<Registry>>,
    pub sessions: Arc<SessionStore>,
    /// Pluggable authenticator. Default: PlaceholderAuthenticator.
    pub authenticator: Arc<dyn Authenticator>,
    /// Pluggable match scorer. Chosen via MATCH_SCORING.
    pub scorer: Arc<dyn MatchScorer>,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let registry = if config.seed_demo_data {
            demo_registry()
        } else {
            Registry::new()
        };

        Self {
            registry: Arc::new(RwLock::new(registry)),
            sessions: Arc::new(SessionStore::new(
                Duration::minutes(config.session_ttl_minutes),
                config.max_sessions,
            )),
            authenticator: Arc::new(PlaceholderAuthenticator::new(
                config.admin_username.clone(),
            )),
            scorer: Arc::from(config.scoring_mode.scorer()),
            config,
        }
    }
}
