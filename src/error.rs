use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Command '{name}' not found")]
    CommandNotFound { name: String },

    #[error("Access denied to {subject}")]
    AccessDenied { subject: String },

    #[error("Failed to parse settings {path}: {message}")]
    Config { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn command_not_found(name: impl Into<String>) -> Self {
        Self::CommandNotFound { name: name.into() }
    }

    pub fn access_denied(subject: impl Into<String>) -> Self {
        Self::AccessDenied {
            subject: subject.into(),
        }
    }

    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
