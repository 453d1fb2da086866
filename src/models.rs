//! Data models and structures
//!
//! Defines the run configuration and the encoded document handed to the
//! Gemini request builder.

use crate::ai::gemini::types::InlineData;
use crate::{Error, Result};
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_RESUME_PATH: &str = "resume.pdf";
pub const DEFAULT_RESUME_MIME_TYPE: &str = "application/pdf";
pub const DEFAULT_OUTPUT_PATH: &str = "gemini_response.txt";

/// A file's bytes, base64-encoded and tagged with their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDocument {
    pub mime_type: String,
    pub data: String,
}

impl From<EncodedDocument> for InlineData {
    fn from(document: EncodedDocument) -> Self {
        InlineData {
            mime_type: document.mime_type,
            data: document.data,
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub resume_path: PathBuf,
    /// `None` means sniff the media type from the file contents.
    pub resume_mime_type: Option<String>,
    /// `None` means use the built-in job description.
    pub job_description_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl Config {
    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::Config(format!("{} environment variable not set", API_KEY_VAR)))?;

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            resume_path: PathBuf::from(DEFAULT_RESUME_PATH),
            resume_mime_type: Some(DEFAULT_RESUME_MIME_TYPE.to_string()),
            job_description_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        })
    }
}
