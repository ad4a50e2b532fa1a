use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Failed to read input file {path}: {reason}")]
    InputUnreadable { path: String, reason: String },

    #[error("Cannot write output file {path}: {source}")]
    OutputUnwritable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SieveError {
    /// Maps a failed read of `path` onto the input half of the taxonomy.
    pub fn from_read_error(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SieveError::InputNotFound {
                path: path.to_string(),
            },
            _ => SieveError::InputUnreadable {
                path: path.to_string(),
                reason: err.to_string(),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SieveError::InputNotFound { .. } | SieveError::InputUnreadable { .. } => {
                ErrorCategory::Input
            }
            SieveError::OutputUnwritable { .. }
            | SieveError::CsvError(_)
            | SieveError::IoError(_) => ErrorCategory::Output,
            SieveError::ConfigError { .. } | SieveError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SieveError::ConfigError { .. } | SieveError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            SieveError::InputNotFound { .. } | SieveError::InputUnreadable { .. } => {
                ErrorSeverity::High
            }
            SieveError::OutputUnwritable { .. }
            | SieveError::CsvError(_)
            | SieveError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SieveError::InputNotFound { path } => format!("File '{}' not found", path),
            SieveError::InputUnreadable { path, .. } => {
                format!("Could not read '{}'", path)
            }
            SieveError::OutputUnwritable { path, .. } => {
                format!("Could not write results to '{}'", path)
            }
            SieveError::CsvError(_) | SieveError::IoError(_) => {
                "Writing the CSV report failed".to_string()
            }
            SieveError::ConfigError { message } => message.clone(),
            SieveError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SieveError::InputNotFound { .. } => "Check the --input path and try again",
            SieveError::InputUnreadable { .. } => {
                "Make sure the file is readable UTF-8 text with one address per line"
            }
            SieveError::OutputUnwritable { .. } => {
                "Make sure the output directory exists and is writable"
            }
            SieveError::CsvError(_) | SieveError::IoError(_) => {
                "Check free disk space and permissions on the output location"
            }
            SieveError::ConfigError { .. } | SieveError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted arguments"
            }
        }
    }

    /// Process exit code for a fatal error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Input | ErrorCategory::Output => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SieveError>;
