use std::path::PathBuf;
use thiserror::Error;

/// Moodtracker error types
#[derive(Error, Debug)]
pub enum MoodError {
    #[error("Profile '{}' exists but cannot be read: {source}", path.display())]
    ProfileNotReadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not save username to '{}': {source}", path.display())]
    ProfileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid option {0}, please select a number between 1-3")]
    InvalidSelection(i64),

    #[error("The -m flag needs a command number (1-3)")]
    MissingFlagValue,

    #[error("Input closed before a selection was made")]
    InputClosed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl MoodError {
    /// Process exit status for an error that ends the run
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodError::ProfileNotReadable { .. } => 3,
            _ => 1,
        }
    }
}

/// Result type for Moodtracker operations
pub type Result<T> = std::result::Result<T, MoodError>;
