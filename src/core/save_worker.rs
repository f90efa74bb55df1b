use crate::core::{PersistedSettings, SettingsStore};
use crate::utils::error::{Result, SplitError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Counters reported when the worker is drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveStats {
    pub written: usize,
    pub failed: usize,
}

/// Background writer for settings snapshots.
///
/// Snapshots are written in submission order, so the latest submission is what a
/// later `load_once` observes. Failed writes are logged and not retried.
pub struct SaveWorker {
    tx: mpsc::UnboundedSender<PersistedSettings>,
    handle: JoinHandle<SaveStats>,
}

impl SaveWorker {
    /// Spawns the writer task. Must be called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn SettingsStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(Self::run(store, rx));
        Self { tx, handle }
    }

    pub fn submit(&self, settings: PersistedSettings) -> Result<()> {
        self.tx
            .send(settings)
            .map_err(|_| SplitError::persistence("save worker has stopped"))
    }

    async fn run(
        store: Arc<dyn SettingsStore>,
        mut rx: mpsc::UnboundedReceiver<PersistedSettings>,
    ) -> SaveStats {
        let mut stats = SaveStats::default();

        while let Some(settings) = rx.recv().await {
            match store.save(&settings).await {
                Ok(()) => {
                    stats.written += 1;
                    tracing::debug!(
                        total_amount = settings.total_amount,
                        person_count = settings.person_count,
                        "Settings saved"
                    );
                }
                Err(e) => {
                    stats.failed += 1;
                    tracing::error!(
                        total_amount = settings.total_amount,
                        person_count = settings.person_count,
                        "❌ Failed to save settings: {} ({})",
                        e,
                        e.recovery_suggestion()
                    );
                }
            }
        }

        stats
    }

    /// Stops accepting snapshots and waits until every queued one was attempted.
    pub async fn shutdown(self) -> SaveStats {
        let Self { tx, handle } = self;
        drop(tx);
        match handle.await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Save worker terminated abnormally: {}", e);
                SaveStats::default()
            }
        }
    }
}
