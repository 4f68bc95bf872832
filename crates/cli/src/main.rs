use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acopio_core::{
    load_config_or_default, load_roster, scan_documents, validate_config, DocumentExtractor,
    LopdfExtractor, PipelineRunner, TextWriter, WorkItem, YoutubeFetcher,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which pipelines to run.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Documents,
    Transcripts,
    All,
}

impl Mode {
    fn parse(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("all") => Ok(Mode::All),
            Some("documents") => Ok(Mode::Documents),
            Some("transcripts") => Ok(Mode::Transcripts),
            Some(other) => {
                bail!("Unknown mode '{}': expected documents, transcripts or all", other)
            }
        }
    }

    fn runs_documents(self) -> bool {
        matches!(self, Mode::Documents | Mode::All)
    }

    fn runs_transcripts(self) -> bool {
        matches!(self, Mode::Transcripts | Mode::All)
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mode = Mode::parse(std::env::args().nth(1).as_deref())?;

    // Determine config path
    let config_path = std::env::var("ACOPIO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("acopio {} starting ({:?} mode)", VERSION, mode);

    // The extractor must be usable before any item is processed; a broken
    // parser fails the whole process here, not item by item.
    let extractor = LopdfExtractor::new();
    extractor
        .validate()
        .await
        .context("Document extractor is not usable")?;

    let fetcher = YoutubeFetcher::new(&config.transcripts);
    let runner = PipelineRunner::new(extractor, fetcher, config.transcripts.languages.clone());

    if mode.runs_documents() {
        let items: Vec<WorkItem> = scan_documents(&config.documents)
            .context("Failed to enumerate documents")?
            .into_iter()
            .map(WorkItem::Document)
            .collect();

        let writer = TextWriter::new(&config.documents.output_dir);
        let report = runner.run(items, &writer).await;
        info!(
            "Documents: {} saved, {} failed (output in {})",
            report.summary.successful,
            report.summary.failed,
            writer.output_dir().display()
        );
    }

    if mode.runs_transcripts() {
        let roster = load_roster(&config.transcripts.roster_path)
            .context("Failed to load candidate roster")?;

        let items: Vec<WorkItem> = roster
            .candidates
            .into_iter()
            .map(|entry| WorkItem::Transcript(entry.into()))
            .collect();

        let writer = TextWriter::new(&config.transcripts.output_dir);
        let report = runner.run(items, &writer).await;
        info!(
            "Transcripts: {} saved, {} failed (output in {})",
            report.summary.successful,
            report.summary.failed,
            writer.output_dir().display()
        );
    }

    Ok(())
}
