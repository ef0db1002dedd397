pub mod config;
pub mod error;
pub mod experiment;
pub mod input;
pub mod outputs;
pub mod services;
pub mod telemetry;
pub mod ui;

pub use config::ExperimentConfig;
pub use experiment::{Experiment, Outcome};
