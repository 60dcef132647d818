use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::UserProfile,
    services::profile::ProfileUpdate,
    store::{ProfileStore, SessionSlot},
};

/// HTTP header carrying the session id
pub const SESSION_HEADER: &str = "x-session-id";

/// Opaque handle for a signed-in session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(SessionId)
            .map_err(|_| AppError::Unauthorized("Malformed session id".to_string()))
    }
}

/// A signed-in user and their working copy of the profile
///
/// Profile edits are applied to this copy only; signing in again starts from
/// the stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub profile: UserProfile,
    pub started_at: DateTime<Utc>,
}

/// Sign-in form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    /// Any non-empty password is accepted
    #[validate(length(min = 1, message = "Please enter your password."))]
    pub password: String,
}

/// Live sessions, mirrored to a local key-value slot on every change
pub struct SessionStore {
    slot: Arc<dyn SessionSlot>,
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl SessionStore {
    pub fn new(slot: Arc<dyn SessionSlot>) -> Self {
        Self {
            slot,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Reloads sessions saved by a previous run.
    ///
    /// An unreadable payload is discarded and the slot cleared. Sessions whose
    /// profile no longer exists in `profiles` are dropped. Returns the number
    /// of sessions restored.
    pub async fn restore(&self, profiles: &dyn ProfileStore) -> AppResult<usize> {
        let Some(payload) = self.slot.load().await? else {
            return Ok(0);
        };

        let saved: Vec<Session> = match serde_json::from_str(&payload) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse saved sessions, clearing slot");
                self.slot.clear().await?;
                return Ok(0);
            }
        };

        let saved_count = saved.len();
        let mut next = HashMap::with_capacity(saved_count);
        for session in saved {
            if profiles.find_by_id(&session.profile.id).await?.is_none() {
                tracing::warn!(
                    session_id = %session.id,
                    profile_id = %session.profile.id,
                    "Dropping saved session for unknown profile"
                );
                continue;
            }
            next.insert(session.id, session);
        }

        let mut sessions = self.sessions.write().await;
        if next.len() == saved_count {
            *sessions = next;
        } else {
            self.commit(&mut sessions, next).await?;
        }

        tracing::info!(restored = sessions.len(), "Sessions restored");
        Ok(sessions.len())
    }

    /// Signs a user in by email. The password is not checked.
    pub async fn login(
        &self,
        profiles: &dyn ProfileStore,
        request: LoginRequest,
    ) -> AppResult<Session> {
        let request = LoginRequest {
            email: request.email.trim().to_string(),
            ..request
        };
        request.validate()?;

        let Some(profile) = profiles.find_by_email(&request.email).await? else {
            tracing::info!(email = %request.email, "Login failed: unknown email");
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let session = Session {
            id: SessionId::new(),
            profile,
            started_at: Utc::now(),
        };

        let mut sessions = self.sessions.write().await;
        let mut next = sessions.clone();
        next.insert(session.id, session.clone());
        self.commit(&mut sessions, next).await?;

        tracing::info!(
            session_id = %session.id,
            first_name = %session.profile.first_name,
            "Login successful"
        );
        Ok(session)
    }

    pub async fn get(&self, id: SessionId) -> AppResult<Session> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Not signed in".to_string()))
    }

    pub async fn logout(&self, id: SessionId) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        let mut next = sessions.clone();
        if next.remove(&id).is_none() {
            return Err(AppError::Unauthorized("Not signed in".to_string()));
        }
        self.commit(&mut sessions, next).await?;

        tracing::info!(session_id = %id, "Logged out");
        Ok(())
    }

    /// Applies a validated edit to the session's profile and returns the result
    pub async fn update_profile(
        &self,
        id: SessionId,
        update: ProfileUpdate,
    ) -> AppResult<UserProfile> {
        let mut sessions = self.sessions.write().await;
        let mut next = sessions.clone();
        let session = next
            .get_mut(&id)
            .ok_or_else(|| AppError::Unauthorized("Not signed in".to_string()))?;

        let updated = update.apply_to(&session.profile)?;
        session.profile = updated.clone();
        self.commit(&mut sessions, next).await?;

        tracing::info!(session_id = %id, "Profile updated");
        Ok(updated)
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Writes `next` to the slot and only then makes it the live map, so a
    /// failed write leaves both untouched.
    async fn commit(
        &self,
        sessions: &mut HashMap<SessionId, Session>,
        next: HashMap<SessionId, Session>,
    ) -> AppResult<()> {
        self.persist(&next).await?;
        *sessions = next;
        Ok(())
    }

    async fn persist(&self, sessions: &HashMap<SessionId, Session>) -> AppResult<()> {
        if sessions.is_empty() {
            return self.slot.clear().await;
        }

        let mut ordered: Vec<&Session> = sessions.values().collect();
        ordered.sort_by_key(|s| s.started_at);
        let payload = serde_json::to_string(&ordered)?;
        self.slot.save(&payload).await
    }
}
