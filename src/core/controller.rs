use crate::core::calculator;
use crate::core::save_worker::{SaveStats, SaveWorker};
use crate::core::{
    BillInput, DisplaySink, PersistedSettings, SettingsStore, ShareSink, SpeechSink, SplitResult,
};
use std::sync::Arc;

/// Lifecycle of the controller. Saves are only issued in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Loading,
    Ready,
}

/// Reconciles the input fields with the settings store and drives the sinks.
pub struct SplitController {
    store: Arc<dyn SettingsStore>,
    display: Arc<dyn DisplaySink>,
    share: Arc<dyn ShareSink>,
    speech: Option<Arc<dyn SpeechSink>>,
    writer: Option<SaveWorker>,
    input: BillInput,
    result: SplitResult,
    last_saved: PersistedSettings,
    state: ControllerState,
}

impl SplitController {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        display: Arc<dyn DisplaySink>,
        share: Arc<dyn ShareSink>,
    ) -> Self {
        Self {
            store,
            display,
            share,
            speech: None,
            writer: None,
            input: BillInput::default(),
            result: SplitResult::INVALID,
            last_saved: PersistedSettings::default(),
            state: ControllerState::Uninitialized,
        }
    }

    pub fn with_speech(mut self, speech: Arc<dyn SpeechSink>) -> Self {
        self.speech = Some(speech);
        self
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn input(&self) -> &BillInput {
        &self.input
    }

    pub fn result(&self) -> SplitResult {
        self.result
    }

    pub fn last_saved(&self) -> PersistedSettings {
        self.last_saved
    }

    pub fn display_text(&self) -> String {
        calculator::display_text(&self.result)
    }

    /// Loads the stored record once, seeds the inputs from it and starts the writer.
    ///
    /// A failed load falls back to defaults. Seeding does not go through the save path.
    pub async fn start(&mut self) {
        if self.state != ControllerState::Uninitialized {
            tracing::warn!("Controller already started ({:?})", self.state);
            return;
        }

        self.state = ControllerState::Loading;
        tracing::debug!("Loading stored settings");

        let loaded = match self.store.load_once().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(
                    "❌ Failed to load settings, using defaults: {} ({})",
                    e,
                    e.recovery_suggestion()
                );
                PersistedSettings::default()
            }
        };

        self.last_saved = loaded;
        self.input = BillInput::new(
            calculator::seed_total_text(loaded.total_amount),
            calculator::seed_person_count_text(loaded.person_count),
        );
        self.recompute();

        self.writer = Some(SaveWorker::spawn(Arc::clone(&self.store)));
        self.state = ControllerState::Ready;

        tracing::info!(
            total_amount = loaded.total_amount,
            person_count = loaded.person_count,
            "✅ Controller ready"
        );
    }

    pub fn set_total_text(&mut self, text: impl Into<String>) -> SplitResult {
        self.input.total_amount_text = text.into();
        self.on_input_changed()
    }

    pub fn set_person_count_text(&mut self, text: impl Into<String>) -> SplitResult {
        self.input.person_count_text = text.into();
        self.on_input_changed()
    }

    fn on_input_changed(&mut self) -> SplitResult {
        let result = self.recompute();
        if self.state == ControllerState::Ready {
            self.persist_if_changed();
        } else {
            tracing::debug!("Input changed while {:?}, not saving", self.state);
        }
        result
    }

    fn recompute(&mut self) -> SplitResult {
        self.result = calculator::compute(&self.input);
        self.display.show(&calculator::display_text(&self.result));
        self.result
    }

    /// Queues a save when the parsed inputs differ from the last saved snapshot.
    /// The snapshot is updated immediately; a failed write is only logged.
    fn persist_if_changed(&mut self) -> bool {
        let candidate = calculator::candidate_settings(&self.input);
        if candidate == self.last_saved {
            return false;
        }

        let Some(writer) = self.writer.as_ref() else {
            return false;
        };
        if let Err(e) = writer.submit(candidate) {
            tracing::error!("❌ {}", e);
        }
        self.last_saved = candidate;
        true
    }

    /// Speaks the current amount if the speech sink reports itself available.
    pub async fn speak(&self) {
        let Some(speech) = self.speech.as_ref() else {
            tracing::debug!("No speech sink configured, skipping");
            return;
        };
        if !speech.is_available() {
            tracing::debug!("Speech sink unavailable, skipping");
            return;
        }

        let text = calculator::speech_text(self.result.per_person_amount);
        if let Err(e) = speech.speak(&text).await {
            tracing::warn!("⚠️ Failed to speak amount: {}", e);
        }
    }

    pub async fn share(&self) {
        let text = calculator::share_text(self.result.per_person_amount);
        if let Err(e) = self.share.share(&text).await {
            tracing::warn!("⚠️ Failed to share amount: {}", e);
        }
    }

    /// Drains queued saves. Call once at process end.
    pub async fn shutdown(mut self) -> SaveStats {
        match self.writer.take() {
            Some(writer) => {
                let stats = writer.shutdown().await;
                tracing::info!(
                    "Settings writer stopped ({} written, {} failed)",
                    stats.written,
                    stats.failed
                );
                stats
            }
            None => SaveStats::default(),
        }
    }
}
