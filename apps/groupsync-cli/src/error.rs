//! CLI error types and exit codes

use groupsync_directory::DirectoryError;
use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success (including "group not found", which yields an empty report)
/// - 1: General error
/// - 4: Validation error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{0}")]
    Directory(#[from] DirectoryError),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Io(_) => 1,
            CliError::Validation(_) => 4,
            CliError::Directory(DirectoryError::Config(_) | DirectoryError::Url(_)) => 4,
            CliError::Directory(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Directory(DirectoryError::Config(msg)) if msg.contains("token") => {
                Some("Pass --token or set GROUPSYNC_ACCESS_TOKEN.")
            }
            CliError::Directory(DirectoryError::Url(_)) => {
                Some("Check --graph-url; it must be an absolute http(s) URL.")
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Config(format!("YAML error: {}", e))
    }
}
