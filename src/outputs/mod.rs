pub mod text;
pub mod trial_log;

pub use trial_log::TrialLog;
