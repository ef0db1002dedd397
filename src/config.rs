use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::experiment::scenario::Scenario;

pub const VIEWPORT: (u16, u16) = (100, 30);
pub const SCENARIOS: [&str; 3] = [
    "You find a wallet on the street. What do you do?",
    "A friend cancels plans last minute. How do you feel?",
    "You see someone drop their phone. What happens next?",
];
pub const LLM_PROGRAM: &str = "ollama";
pub const LLM_MODEL: &str = "llama2";
pub const LLM_BASE_URL: &str = "http://localhost:8080";
pub const OUTPUT_FILE: &str = "experiment_data.csv";
pub const DIAGNOSTICS_FILE: &str = "paraphrase_lab.log";

/// Stored variants are cut to this many characters (plus `...`).
pub const STORED_LIMIT: usize = 200;
/// Rating screen text is cut to this many characters, independently of storage.
pub const DISPLAY_LIMIT: usize = 120;

pub const CLOSING_DELAY_MS: u64 = 3_000;
pub const POLL_INTERVAL_MS: u64 = 50;

/// How the three variants get produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backend {
    /// `<program> run <model>` with the prompt on stdin.
    Command { program: String, model: String },
    /// llama-server `/completion` endpoint.
    Http {
        base_url: String,
        n_predict: usize,
        temperature: f32,
    },
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Command {
            program: LLM_PROGRAM.to_string(),
            model: LLM_MODEL.to_string(),
        }
    }
}

/// Every tunable of a run. Fixed before the screen opens; there is no
/// config file and no command line.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentConfig {
    pub viewport: (u16, u16),
    pub scenarios: Vec<String>,
    pub backend: Backend,
    pub output_path: PathBuf,
    pub diagnostics_path: PathBuf,
    pub stored_limit: usize,
    pub display_limit: usize,
    #[serde(with = "millis")]
    pub closing_delay: Duration,
    #[serde(with = "millis")]
    pub poll_interval: Duration,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            viewport: VIEWPORT,
            scenarios: SCENARIOS.iter().map(|s| s.to_string()).collect(),
            backend: Backend::default(),
            output_path: PathBuf::from(OUTPUT_FILE),
            diagnostics_path: PathBuf::from(DIAGNOSTICS_FILE),
            stored_limit: STORED_LIMIT,
            display_limit: DISPLAY_LIMIT,
            closing_delay: Duration::from_millis(CLOSING_DELAY_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}

impl ExperimentConfig {
    /// Scenarios numbered from 1 in presentation order.
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .enumerate()
            .map(|(i, text)| Scenario::new(i + 1, text.clone()))
            .collect()
    }
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}
