use crate::domain::model::PersistedSettings;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable key-value boundary holding the two persisted slots.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads the first available snapshot. Defaults to `(0, 0)` when nothing was written.
    async fn load_once(&self) -> Result<PersistedSettings>;

    /// Writes both fields as one atomic pair.
    async fn save(&self, settings: &PersistedSettings) -> Result<()>;
}

pub trait DisplaySink: Send + Sync {
    fn show(&self, text: &str);
}

#[async_trait]
pub trait SpeechSink: Send + Sync {
    fn is_available(&self) -> bool;

    async fn speak(&self, text: &str) -> Result<()>;
}

#[async_trait]
pub trait ShareSink: Send + Sync {
    async fn share(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn settings_path(&self) -> &str;
    fn ephemeral(&self) -> bool;
    fn speech_enabled(&self) -> bool;
}
