//! AI service integration for resume analysis
//!
//! Provides the interface to Gemini's `generateContent` API used to compare a
//! resume against a job description.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::GeminiAnalysisClient;
pub use mock::MockAnalysisClient;

use crate::ai::gemini::GenerateContentRequest;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Send one request and wait for the complete response text.
    async fn generate_text(&self, request: &GenerateContentRequest) -> Result<String>;
}
