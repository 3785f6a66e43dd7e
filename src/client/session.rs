//! Bearer-token session owned by a client instance.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::Error;

/// A bearer token obtained from the auth endpoint.
///
/// Timestamps are kept exactly as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Token sent as `Authorization: Bearer <access_token>`
    pub access_token: String,
    /// Token type reported by the server (normally `Bearer`)
    pub token_type: String,
    /// When the server issued the token
    pub issued_at: String,
    /// When the server will stop accepting the token
    pub expires_at: String,
}

/// Holds the current [`Session`] and serializes refreshes.
///
/// Reads never wait on a refresh in progress; they see the previous token
/// until the new one is stored. Refreshes are single-flight: a caller that
/// saw a 401 with token `T` only contacts the auth endpoint if the stored
/// token is still `T` and no exchange finished while it waited for its
/// turn. Otherwise it takes the outcome of that exchange, the new token or
/// the failure.
#[derive(Debug, Default)]
pub(crate) struct SessionStore {
    current: RwLock<Option<Session>>,
    /// Completed exchanges so far.
    attempts: AtomicU64,
    /// Most recent failed exchange and the attempt number it ended.
    refresh: Mutex<Option<(u64, Arc<Error>)>>,
}

impl SessionStore {
    /// Returns the current access token, if a session is held.
    pub(crate) fn access_token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    /// Returns a copy of the current session.
    pub(crate) fn snapshot(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the held session wholesale.
    pub(crate) fn replace(&self, session: Session) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Obtains a session newer than `stale`, calling `fetch` at most once
    /// across all concurrent callers presenting the same stale token.
    ///
    /// `stale` is the token the rejected request carried (`None` if it
    /// carried none). Failures come back as [`Error::Auth`]; cancellation
    /// and deadline expiry pass through and are not handed to waiters.
    pub(crate) async fn refresh_with<F, Fut>(
        &self,
        stale: Option<&str>,
        fetch: F,
    ) -> Result<Session, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Session, Error>>,
    {
        let seen = self.attempts.load(Ordering::Acquire);
        let mut last_failure = self.refresh.lock().await;

        if let Some(current) = self.snapshot() {
            if stale != Some(current.access_token.as_str()) {
                return Ok(current);
            }
        }
        if let Some((attempt, source)) = last_failure.as_ref() {
            if *attempt > seen {
                return Err(Error::Auth {
                    source: Arc::clone(source),
                });
            }
        }

        let result = fetch().await;
        let attempt = self.attempts.fetch_add(1, Ordering::AcqRel) + 1;

        match result.map_err(Error::auth) {
            Ok(session) => {
                *last_failure = None;
                self.replace(session.clone());
                Ok(session)
            }
            Err(Error::Auth { source }) => {
                *last_failure = Some((attempt, Arc::clone(&source)));
                Err(Error::Auth { source })
            }
            Err(other) => Err(other),
        }
    }
}
