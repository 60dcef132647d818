use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use crate::error::AppResult;

/// A single local key-value slot holding the persisted session payload
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SessionSlot: Send + Sync {
    /// Returns the stored payload, or `None` when the slot is empty
    async fn load(&self) -> AppResult<Option<String>>;

    /// Replaces the stored payload
    async fn save(&self, payload: &str) -> AppResult<()>;

    /// Empties the slot. Clearing an empty slot is not an error.
    async fn clear(&self) -> AppResult<()>;
}

/// Slot backed by one file on local disk
pub struct FileSessionSlot {
    path: PathBuf,
}

impl FileSessionSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SessionSlot for FileSessionSlot {
    async fn load(&self) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(payload) if payload.trim().is_empty() => Ok(None),
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, payload: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // Write beside the target then rename so readers never see a partial file
        let staging = self.path.with_extension("tmp");
        tokio::fs::write(&staging, payload).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        tracing::debug!(path = %self.path.display(), bytes = payload.len(), "Session slot saved");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Slot that lives only as long as the process
#[derive(Default)]
pub struct MemorySessionSlot {
    payload: RwLock<Option<String>>,
}

impl MemorySessionSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionSlot for MemorySessionSlot {
    async fn load(&self) -> AppResult<Option<String>> {
        Ok(self.payload.read().await.clone())
    }

    async fn save(&self, payload: &str) -> AppResult<()> {
        *self.payload.write().await = Some(payload.to_string());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.payload.write().await = None;
        Ok(())
    }
}
