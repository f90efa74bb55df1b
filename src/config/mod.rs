pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use crate::utils::error::Result;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bill-split")]
#[command(about = "Split a bill between people and remember the last inputs")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Where the last inputs are stored (overrides the config file)
    #[arg(long)]
    pub settings_path: Option<String>,

    #[arg(long, help = "Keep settings in memory only")]
    pub ephemeral: bool,

    #[arg(long, help = "Disable spoken output")]
    pub no_speech: bool,

    #[arg(long, help = "Emit JSON logs")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and applies the command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(path) = &self.settings_path {
            config.storage.path = path.clone();
        }
        if self.ephemeral {
            config.storage.ephemeral = true;
        }
        if self.no_speech {
            config.speech.enabled = false;
        }
        if self.json_logs {
            config.logging.json = true;
        }

        Ok(config)
    }
}
