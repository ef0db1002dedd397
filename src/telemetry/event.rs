use serde::{Deserialize, Serialize};
use std::fmt;

use crate::experiment::trial::SimilarityLevel;

/// Where a run currently is. One pass per scenario between the two ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Instructions,
    ScenarioDisplay,
    ResponseCapture,
    Generating,
    RatingDisplay,
    Logging,
    Closing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEnd {
    Completed,
    Aborted,
}

// Allowed: stages, levels, scenario numbers, durations, counts.
// Forbidden: response text, variant text, prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TelemetryEvent {
    StageEntered {
        stage: Stage,
        scenario: Option<usize>,
    },

    Generation {
        level: SimilarityLevel,
        latency_ms: u64,
        succeeded: bool,
    },

    TrialLogged {
        scenario: usize,
        selected: SimilarityLevel,
    },

    RunFinished {
        end: RunEnd,
    },

    SessionSummary {
        trials_logged: usize,
        generation_failures: usize,
        avg_generation_ms: f64,
        end: Option<RunEnd>,
    },
}
