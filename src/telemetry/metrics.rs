use std::collections::VecDeque;

use super::event::{RunEnd, TelemetryEvent};
use crate::experiment::trial::SimilarityLevel;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationStats {
    pub calls: usize,
    pub failures: usize,
    pub avg_latency_ms: f64,
    pub max_latency_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub generation: GenerationStats,
    pub trials_logged: usize,
    /// Selections per level: [high, medium, low].
    pub selections: [usize; 3],
    pub end: Option<RunEnd>,
}

/// Pure fold over the event buffer.
pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    let mut total_latency: u64 = 0;

    for event in events {
        match event {
            TelemetryEvent::Generation {
                latency_ms,
                succeeded,
                ..
            } => {
                snap.generation.calls += 1;
                if !succeeded {
                    snap.generation.failures += 1;
                }
                total_latency += latency_ms;
                snap.generation.max_latency_ms = snap.generation.max_latency_ms.max(*latency_ms);
            }
            TelemetryEvent::TrialLogged { selected, .. } => {
                snap.trials_logged += 1;
                let slot = SimilarityLevel::ALL
                    .iter()
                    .position(|level| level == selected)
                    .unwrap_or(0);
                snap.selections[slot] += 1;
            }
            TelemetryEvent::RunFinished { end } => snap.end = Some(*end),
            TelemetryEvent::StageEntered { .. } | TelemetryEvent::SessionSummary { .. } => {}
        }
    }

    if snap.generation.calls > 0 {
        snap.generation.avg_latency_ms = total_latency as f64 / snap.generation.calls as f64;
    }

    snap
}
