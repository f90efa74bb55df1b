use bill_split::core::{ConfigProvider, SettingsStore};
use bill_split::utils::{logger, validation::Validate};
use bill_split::{
    CliConfig, CommandSpeech, ConsoleDisplay, ConsoleShare, FileSettingsStore,
    MemorySettingsStore, SplitController,
};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Total(&'a str),
    People(&'a str),
    Speak,
    Share,
    Show,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let (name, arg) = line
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((line, ""));

    match name {
        "total" | "t" => Command::Total(arg),
        "people" | "p" => Command::People(arg),
        "speak" => Command::Speak,
        "share" => Command::Share,
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other),
    }
}

/// A read error ends the session like EOF, so queued saves are still drained.
fn line_or_stop(line: std::io::Result<Option<String>>) -> Option<String> {
    match line {
        Ok(line) => line,
        Err(e) => {
            tracing::error!("❌ Failed to read input: {}", e);
            None
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  total <amount>   set the bill total (empty clears it)");
    println!("  people <count>   set the number of people (empty clears it)");
    println!("  show             print the current split");
    println!("  speak            read the amount per person aloud");
    println!("  share            print the shareable text");
    println!("  quit             save and exit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.logging.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting bill-split");
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store: Arc<dyn SettingsStore> = if config.ephemeral() {
        tracing::info!("Settings kept in memory only");
        Arc::new(MemorySettingsStore::new())
    } else {
        tracing::info!("📁 Settings file: {}", config.settings_path());
        Arc::new(FileSettingsStore::new(config.settings_path()))
    };

    let speech = if config.speech_enabled() {
        CommandSpeech::probe(config.speech.command.clone(), config.speech.args.clone()).await
    } else {
        CommandSpeech::disabled()
    };

    let mut controller =
        SplitController::new(store, Arc::new(ConsoleDisplay), Arc::new(ConsoleShare))
            .with_speech(Arc::new(speech));
    controller.start().await;

    let input = controller.input();
    println!(
        "total = {:?}, people = {:?} (type 'help' for commands)",
        input.total_amount_text, input.person_count_text
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line_or_stop(line),
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        match parse_command(&line) {
            Command::Total(text) => {
                controller.set_total_text(text);
            }
            Command::People(text) => {
                controller.set_person_count_text(text);
            }
            Command::Speak => controller.speak().await,
            Command::Share => controller.share().await,
            Command::Show => println!("💰 {}", controller.display_text()),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(name) => {
                eprintln!("Unknown command '{}', type 'help'", name);
            }
        }
    }

    let stats = controller.shutdown().await;
    if stats.failed > 0 {
        eprintln!("⚠️ {} settings write(s) failed, see log", stats.failed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("total 99.99"), Command::Total("99.99"));
        assert_eq!(parse_command("  people   3 "), Command::People("3"));
        assert_eq!(parse_command("total"), Command::Total(""));
        assert_eq!(parse_command("speak"), Command::Speak);
        assert_eq!(parse_command(""), Command::Show);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("tip 10"), Command::Unknown("tip"));
    }

    #[test]
    fn test_read_error_stops_the_loop() {
        assert_eq!(
            line_or_stop(Ok(Some("total 10".to_string()))),
            Some("total 10".to_string())
        );
        assert_eq!(line_or_stop(Ok(None)), None);
        assert_eq!(
            line_or_stop(Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8"
            ))),
            None
        );
    }
}
