use anyhow::Result;
use clap::Parser;
use resume_skill_matcher::app::{self, AppServices};
use resume_skill_matcher::models::{Config, API_KEY_VAR};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "resume-skill-matcher")]
#[command(about = "Compare a resume PDF against a job description with Gemini")]
struct CliArgs {
    /// Resume file to analyze.
    #[arg(long, value_name = "PATH", default_value = "resume.pdf")]
    resume: PathBuf,

    /// Media type of the resume, or `auto` to detect it from the file contents.
    #[arg(long, value_name = "TYPE", default_value = "application/pdf")]
    mime_type: String,

    /// Read the job description from a file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    job_description: Option<PathBuf>,

    /// Where to save the response text.
    #[arg(long, value_name = "PATH", default_value = "gemini_response.txt")]
    output: PathBuf,
}

impl CliArgs {
    fn apply(self, config: &mut Config) {
        config.resume_path = self.resume;
        config.resume_mime_type = parse_mime_type_arg(&self.mime_type);
        config.job_description_path = self.job_description;
        config.output_path = self.output;
    }
}

fn parse_mime_type_arg(input: &str) -> Option<String> {
    if input.eq_ignore_ascii_case("auto") {
        None
    } else {
        Some(input.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_skill_matcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    dotenvy::dotenv().ok();
    let result = app::start(
        |key| std::env::var(key).ok(),
        |config| args.apply(config),
        AppServices::gemini,
    )
    .await;

    match result {
        Ok(stage) => {
            info!("Run finished at stage {:?}", stage);
            Ok(())
        }
        Err(e) if e.is_fatal_to_process() => {
            error!("Error: {}", e);
            error!("Please set the {} in your .env file.", API_KEY_VAR);
            std::process::exit(1);
        }
        // Already logged where it happened.
        Err(_) => Ok(()),
    }
}
