use crate::core::{PersistedSettings, SettingsStore};
use crate::utils::error::{Result, SplitError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Settings kept as a small JSON document on disk.
///
/// Writes go to a sibling temp file that is renamed over the target, so a reader
/// sees either the old pair or the new pair.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "settings".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load_once(&self) -> Result<PersistedSettings> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", self.path.display());
                return Ok(PersistedSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings: PersistedSettings = serde_json::from_slice(&data).map_err(|e| {
            SplitError::persistence(format!(
                "corrupt settings file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    async fn save(&self, settings: &PersistedSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(settings)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &data).await?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        Ok(())
    }
}
