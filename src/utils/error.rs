use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Cannot parse {field} from {value:?}")]
    ParseError { field: String, value: String },

    #[error("Settings persistence failed: {message}")]
    PersistenceError { message: String },

    #[error("{sink} unavailable: {message}")]
    PeripheralError { sink: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Persistence,
    Peripheral,
    Configuration,
}

impl SplitError {
    pub fn parse(field: &str, value: &str) -> Self {
        SplitError::ParseError {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        SplitError::PersistenceError {
            message: message.into(),
        }
    }

    pub fn peripheral(sink: &str, message: impl Into<String>) -> Self {
        SplitError::PeripheralError {
            sink: sink.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SplitError::ParseError { .. } => ErrorCategory::Parse,
            SplitError::PersistenceError { .. }
            | SplitError::IoError(_)
            | SplitError::SerializationError(_) => ErrorCategory::Persistence,
            SplitError::PeripheralError { .. } => ErrorCategory::Peripheral,
            SplitError::ConfigError { .. } | SplitError::ValidationError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Only configuration problems stop the program; everything else degrades.
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Parse => "Enter a plain number, e.g. 99.99 for the total and 3 for people",
            ErrorCategory::Persistence => {
                "Check that the settings file location is writable; the next edit saves again"
            }
            ErrorCategory::Peripheral => "Install or enable the speech/share tool and retry",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
