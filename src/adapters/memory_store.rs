use crate::core::{PersistedSettings, SettingsStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    record: Arc<RwLock<Option<PersistedSettings>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PersistedSettings) -> Self {
        Self {
            record: Arc::new(RwLock::new(Some(settings))),
        }
    }

    /// The stored record, `None` if nothing was ever saved.
    pub async fn snapshot(&self) -> Option<PersistedSettings> {
        *self.record.read().await
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load_once(&self) -> Result<PersistedSettings> {
        Ok((*self.record.read().await).unwrap_or_default())
    }

    async fn save(&self, settings: &PersistedSettings) -> Result<()> {
        *self.record.write().await = Some(*settings);
        Ok(())
    }
}
