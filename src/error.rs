use thiserror::Error;

/// Failure of a single backend invocation.
///
/// Never aborts a trial: the variant adapter turns it into an inline
/// `Error: ...` marker that is shown and logged like generated text.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to start backend '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("backend i/o failed: {0}")]
    Io(#[source] std::io::Error),

    #[error("{}", exit_detail(.code, .stderr))]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM Server Error: {0}")]
    Status(reqwest::StatusCode),
}

fn exit_detail(code: &Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match code {
        Some(code) => format!("backend exited with status {}", code),
        None => "backend terminated by signal".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum TrialLogError {
    #[error("trial log i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("trial log csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that stop a run. Escape is not one of them, see `Outcome::Aborted`.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("display failed: {0}")]
    Display(#[source] std::io::Error),

    #[error("reading input failed: {0}")]
    Input(#[source] std::io::Error),

    #[error(transparent)]
    Log(#[from] TrialLogError),
}
