use crate::core::{DisplaySink, ShareSink};
use crate::utils::error::{Result, SplitError};
use async_trait::async_trait;
use std::io::Write;

/// Prints the per-person amount to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn show(&self, text: &str) {
        println!("💰 {}", text);
    }
}

/// Hands the share text to stdout, where it can be piped or copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleShare;

#[async_trait]
impl ShareSink for ConsoleShare {
    async fn share(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "📤 {}", text)
            .and_then(|_| stdout.flush())
            .map_err(|e| SplitError::peripheral("share", e.to_string()))
    }
}
