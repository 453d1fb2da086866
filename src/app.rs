//! Application orchestration for a single resume analysis run.

use crate::ai::{AnalysisService, GeminiAnalysisClient};
use crate::document::encode_document;
use crate::models::Config;
use crate::output::write_response;
use crate::request::build_analysis_request;
use crate::{prompts, Error, Result};
use std::path::PathBuf;
use tracing::{error, info};

/// Furthest stage a run reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Init,
    Encoded,
    Requested,
    Responded,
    Written,
}

/// File locations and prompt inputs for a run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub resume_path: PathBuf,
    pub resume_mime_type: Option<String>,
    pub job_description_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl From<&Config> for RunSettings {
    fn from(config: &Config) -> Self {
        Self {
            resume_path: config.resume_path.clone(),
            resume_mime_type: config.resume_mime_type.clone(),
            job_description_path: config.job_description_path.clone(),
            output_path: config.output_path.clone(),
        }
    }
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub analysis: Box<dyn AnalysisService>,
}

impl AppServices {
    /// Services backed by the Gemini API.
    pub fn gemini(config: &Config) -> Self {
        info!("Analysis provider: Gemini (model: {})", config.model);
        Self {
            analysis: Box::new(GeminiAnalysisClient::new(
                config.api_key.clone(),
                config.model.clone(),
            )),
        }
    }
}

/// Resolve configuration, then run the pipeline once.
///
/// The credential is resolved first; a missing one returns `Error::Config`
/// before `configure` or `services` are called and before any file is read.
pub async fn start<L, C, S>(lookup: L, configure: C, services: S) -> Result<RunStage>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&mut Config),
    S: FnOnce(&Config) -> AppServices,
{
    let mut config = Config::from_lookup(lookup)?;
    configure(&mut config);

    let app = App::with_services(services(&config), RunSettings::from(&config));
    app.run().await
}

/// Drives encode, request, respond and write in strict sequence.
pub struct App {
    analysis: Box<dyn AnalysisService>,
    settings: RunSettings,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices, settings: RunSettings) -> Self {
        Self {
            analysis: services.analysis,
            settings,
        }
    }

    /// Run the pipeline once.
    ///
    /// Input and service failures are returned as errors before any output is
    /// written. A failed write is logged and reported as [`RunStage::Responded`].
    pub async fn run(&self) -> Result<RunStage> {
        let mut stage = RunStage::Init;

        let document = encode_document(
            &self.settings.resume_path,
            self.settings.resume_mime_type.as_deref(),
        )
        .await?;
        stage = self.advance(stage, RunStage::Encoded);

        let job_description = self.job_description().await?;
        let request = build_analysis_request(&job_description, document);

        info!("Generating response...");
        stage = self.advance(stage, RunStage::Requested);
        let text = self.analysis.generate_text(&request).await.map_err(|e| {
            error!("Error during Gemini API call: {}", e);
            e
        })?;
        stage = self.advance(stage, RunStage::Responded);

        println!("--- Gemini Response ---");
        println!("{}", text);

        match write_response(&self.settings.output_path, &text).await {
            Ok(()) => Ok(self.advance(stage, RunStage::Written)),
            Err(e) => {
                error!("Error saving file: {}", e);
                Ok(stage)
            }
        }
    }

    async fn job_description(&self) -> Result<String> {
        match &self.settings.job_description_path {
            Some(path) => tokio::fs::read_to_string(path).await.map_err(|source| {
                error!("Error reading file {}: {}", path.display(), source);
                Error::InputRead {
                    path: path.clone(),
                    source,
                }
            }),
            None => Ok(prompts::JOB_DESCRIPTION.to_string()),
        }
    }

    fn advance(&self, from: RunStage, to: RunStage) -> RunStage {
        tracing::debug!("Run stage {:?} -> {:?}", from, to);
        to
    }
}
