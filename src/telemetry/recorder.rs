use std::collections::VecDeque;
use tracing::info;

use super::event::TelemetryEvent;
use super::metrics::{compute_snapshot, TelemetrySnapshot};

const MAX_EVENTS: usize = 10_000;

#[derive(Debug, Default)]
pub struct TelemetryRecorder {
    buffer: VecDeque<TelemetryEvent>,
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(256),
        }
    }

    pub fn record(&mut self, event: TelemetryEvent) {
        if self.buffer.len() >= MAX_EVENTS {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    pub fn events(&self) -> impl Iterator<Item = &TelemetryEvent> {
        self.buffer.iter()
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        compute_snapshot(&self.buffer)
    }

    /// Called once on shutdown. Traces the summary and appends it as the
    /// last event of the session.
    pub fn aggregate_session(&mut self) {
        let snap = self.snapshot();
        info!(
            trials = snap.trials_logged,
            generation_failures = snap.generation.failures,
            avg_generation_ms = snap.generation.avg_latency_ms,
            max_generation_ms = snap.generation.max_latency_ms,
            end = ?snap.end,
            "session summary"
        );

        self.record(TelemetryEvent::SessionSummary {
            trials_logged: snap.trials_logged,
            generation_failures: snap.generation.failures,
            avg_generation_ms: snap.generation.avg_latency_ms,
            end: snap.end,
        });
    }
}
