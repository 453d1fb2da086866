//! Resume skill matcher - compares a PDF resume against a job description
//!
//! Sends the resume inline to Gemini together with a fixed analysis prompt and
//! saves the model's list of matching, missing, and recommended skills.

pub mod ai;
pub mod app;
pub mod document;
pub mod error;
pub mod models;
pub mod output;
pub mod prompts;
pub mod request;

pub use error::{Error, Result};
