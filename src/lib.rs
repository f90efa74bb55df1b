pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    CommandSpeech, ConsoleDisplay, ConsoleShare, FileSettingsStore, MemorySettingsStore,
};
pub use config::AppConfig;
pub use core::{
    calculator::compute,
    controller::{ControllerState, SplitController},
    save_worker::SaveStats,
};
pub use domain::model::{BillInput, PersistedSettings, SplitResult};
pub use utils::error::{Result, SplitError};
