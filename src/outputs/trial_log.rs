use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::TrialLogError;
use crate::experiment::trial::{SimilarityLevel, Trial};

pub const COLUMNS: [&str; 6] = ["scenario", "participant", "high", "medium", "low", "selected"];

/// One CSV row. Field order is the column order.
#[derive(Debug, Serialize)]
struct TrialRecord<'a> {
    scenario: &'a str,
    participant: &'a str,
    high: &'a str,
    medium: &'a str,
    low: &'a str,
    selected: SimilarityLevel,
}

impl<'a> From<&'a Trial> for TrialRecord<'a> {
    fn from(trial: &'a Trial) -> Self {
        Self {
            scenario: &trial.scenario,
            participant: &trial.response,
            high: &trial.variants.high,
            medium: &trial.variants.medium,
            low: &trial.variants.low,
            selected: trial.selected,
        }
    }
}

/// Append-only CSV log of finished trials. The file is the only state.
#[derive(Debug, Clone)]
pub struct TrialLog {
    path: PathBuf,
}

impl TrialLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens, appends one row, flushes and closes.
    ///
    /// The header goes in only when the file is missing or empty, so
    /// consecutive runs share one header.
    pub fn append(&self, trial: &Trial) -> Result<(), TrialLogError> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(COLUMNS)?;
        }
        writer.serialize(TrialRecord::from(trial))?;
        writer.flush()?;

        info!(path = %self.path.display(), header = needs_header, "trial logged");
        Ok(())
    }
}
