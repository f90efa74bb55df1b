pub mod calculator;
pub mod controller;
pub mod save_worker;

pub use crate::domain::model::{BillInput, PersistedSettings, SplitResult};
pub use crate::domain::ports::{ConfigProvider, DisplaySink, SettingsStore, ShareSink, SpeechSink};
pub use crate::utils::error::Result;
