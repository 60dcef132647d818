use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{data::demo_profiles, error::AppResult, models::UserProfile};

/// Lookup of user profiles by identity
///
/// Implementations return `Ok(None)` for unknown users; errors are reserved
/// for the store itself failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Finds a profile by email, ignoring ASCII case
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>>;
}

/// Profile store over a fixed in-memory set
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryProfileStore {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        let profiles = profiles.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Store holding the demo accounts
    pub fn seeded() -> Self {
        Self::new(demo_profiles())
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(id).cloned())
    }
}
