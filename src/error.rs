//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read input file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Failed to write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this failure should end the process with a non-zero status.
    ///
    /// Only a missing credential does; every other failure is reported and the
    /// run ends normally.
    pub fn is_fatal_to_process(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_config_errors_are_process_fatal() {
        assert!(Error::Config("missing".to_string()).is_fatal_to_process());
        assert!(!Error::AiProvider("boom".to_string()).is_fatal_to_process());
        assert!(!Error::InputRead {
            path: PathBuf::from("resume.pdf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .is_fatal_to_process());
    }

    #[test]
    fn test_input_read_message_names_path() {
        let err = Error::InputRead {
            path: PathBuf::from("resume.pdf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("resume.pdf"));
    }
}
