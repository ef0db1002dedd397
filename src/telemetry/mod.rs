//! Run telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a write-only side layer. Experiment logic never reads it.
//!
//! # PRIVACY INVARIANT
//! Events carry no participant or generated text: only stages, levels,
//! scenario numbers, durations and counts.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::{RunEnd, Stage, TelemetryEvent};
pub use metrics::TelemetrySnapshot;
pub use recorder::TelemetryRecorder;
