pub mod analysis;
pub mod client;
pub mod types;

pub use analysis::GeminiAnalysisClient;
pub use types::{Content, GenerateContentRequest, GenerationConfig, InlineData, Part};
