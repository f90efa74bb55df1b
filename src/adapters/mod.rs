// Adapters layer: concrete implementations of the domain ports (storage, console, speech).

pub mod console;
pub mod file_store;
pub mod memory_store;
pub mod speech;

pub use console::{ConsoleDisplay, ConsoleShare};
pub use file_store::FileSettingsStore;
pub use memory_store::MemorySettingsStore;
pub use speech::CommandSpeech;
