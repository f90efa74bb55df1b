use crate::core::SpeechSink;
use crate::utils::error::{Result, SplitError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Speaks through an external text-to-speech program, e.g. `espeak-ng -v pt-br`.
/// The sentence is passed as the last argument.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
    available: bool,
}

impl CommandSpeech {
    /// Checks once whether the program can be launched.
    pub async fn probe(program: impl Into<String>, args: Vec<String>) -> Self {
        let program = program.into();
        let available = match Command::new(&program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::warn!("⚠️ Speech program '{}' not usable: {}", program, e);
                false
            }
        };
        tracing::debug!("Speech program '{}' available: {}", program, available);

        Self {
            program,
            args,
            available,
        }
    }

    pub fn disabled() -> Self {
        Self {
            program: String::new(),
            args: Vec::new(),
            available: false,
        }
    }
}

#[async_trait]
impl SpeechSink for CommandSpeech {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn speak(&self, text: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(|e| SplitError::peripheral("speech", e.to_string()))?;

        if !status.success() {
            return Err(SplitError::peripheral(
                "speech",
                format!("'{}' exited with {}", self.program, status),
            ));
        }
        Ok(())
    }
}
