use std::collections::HashMap;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::auth::SessionContext;

pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 8 * 60;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct StoredSession {
    session: SessionContext,
    /// Monotonic issue order; breaks ties between equal login timestamps.
    issued: u64,
}

#[derive(Default)]
struct Sessions {
    by_token: HashMap<Uuid, StoredSession>,
    next_issued: u64,
}

/// Process-local map from bearer token to session. Nothing is persisted;
/// every session is gone after a restart.
///
/// Bounded two ways: sessions older than `ttl` resolve as logged out and are
/// purged on the next insert, and the map never holds more than
/// `max_sessions` entries (the oldest is evicted first).
pub struct SessionStore {
    sessions: RwLock<Sessions>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(
            Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
            DEFAULT_MAX_SESSIONS,
        )
    }
}

impl SessionStore {
    pub fn new(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(Sessions::default()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Stores a logged-in session and returns its fresh token.
    pub async fn insert(&self, session: SessionContext) -> Uuid {
        let token = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;

        sessions
            .by_token
            .retain(|_, stored| !self.is_expired(&stored.session));

        while sessions.by_token.len() >= self.max_sessions {
            let oldest = sessions
                .by_token
                .iter()
                .min_by_key(|(_, stored)| (stored.session.logged_in_at(), stored.issued))
                .map(|(token, _)| *token);
            match oldest {
                Some(oldest) => {
                    debug!("Session store full, evicting oldest session");
                    sessions.by_token.remove(&oldest);
                }
                None => break,
            }
        }

        let issued = sessions.next_issued;
        sessions.next_issued += 1;
        sessions
            .by_token
            .insert(token, StoredSession { session, issued });
        token
    }

    /// Unknown, missing, or expired tokens resolve to a logged-out session.
    pub async fn resolve(&self, token: Option<Uuid>) -> SessionContext {
        let Some(token) = token else {
            return SessionContext::new();
        };
        self.sessions
            .read()
            .await
            .by_token
            .get(&token)
            .map(|stored| &stored.session)
            .filter(|session| !self.is_expired(session))
            .cloned()
            .unwrap_or_default()
    }

    /// Logs the session out and forgets the token. Returns false if the token was unknown.
    pub async fn end(&self, token: Uuid) -> bool {
        match self.sessions.write().await.by_token.remove(&token) {
            Some(mut stored) => {
                stored.session.logout();
                true
            }
            None => false,
        }
    }

    fn is_expired(&self, session: &SessionContext) -> bool {
        match session.logged_in_at() {
            Some(at) => Utc::now() - at >= self.ttl,
            None => true,
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.by_token.len()
    }
}
