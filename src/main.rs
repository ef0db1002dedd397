use anyhow::{anyhow, Context};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use paraphrase_lab::config::ExperimentConfig;
use paraphrase_lab::experiment::{Experiment, Outcome};
use paraphrase_lab::input::terminal::TerminalKeys;
use paraphrase_lab::input::KeyMap;
use paraphrase_lab::services::llm::AnyGenerator;
use paraphrase_lab::ui::TerminalDisplay;

// The terminal belongs to the participant, so diagnostics go to a file.
fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening diagnostics log {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("setting default subscriber failed: {}", e))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Fixed configuration, logging
    let config = ExperimentConfig::default();
    init_tracing(&config.diagnostics_path)?;
    tracing::info!("Paraphrase lab booting...");
    match serde_json::to_string(&config) {
        Ok(json) => tracing::debug!(config = %json, "configuration"),
        Err(e) => tracing::warn!(error = %e, "could not serialize configuration"),
    }

    // 2. Backend + screen
    let generator = AnyGenerator::from_backend(&config.backend);
    let display = TerminalDisplay::open(config.viewport).context("opening terminal")?;
    let keys = TerminalKeys::new(KeyMap::german());

    // 3. Run. Dropping the experiment drops the display and restores the terminal.
    let mut experiment = Experiment::new(config, display, keys, generator);
    tracing::info!(session = %experiment.session(), "session started");
    let outcome = experiment.run().await;
    drop(experiment);

    match outcome.context("experiment failed")? {
        Outcome::Completed { trials } => tracing::info!(trials, "run completed"),
        Outcome::Aborted { trials } => tracing::info!(trials, "run aborted by participant"),
    }
    Ok(())
}
