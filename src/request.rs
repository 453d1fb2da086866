//! Builds the resume-analysis request sent to Gemini.

use crate::ai::gemini::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::models::EncodedDocument;
use crate::prompts;

/// Render the analysis instruction for a job description.
pub fn analysis_instruction(job_description: &str) -> String {
    prompts::render(
        prompts::SKILL_ANALYSIS,
        &[("job_description", job_description)],
    )
}

/// Assemble the two-message conversation (instruction, then document) and
/// the fixed generation options.
///
/// The document is not inspected here.
pub fn build_analysis_request(
    job_description: &str,
    document: EncodedDocument,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![
            Content::user(vec![Part::Text {
                text: analysis_instruction(job_description),
            }]),
            Content::user(vec![Part::InlineData {
                inline_data: document.into(),
            }]),
        ],
        generation_config: GenerationConfig::skill_analysis(),
    }
}
