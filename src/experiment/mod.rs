pub mod order;
pub mod runner;
pub mod scenario;
pub mod trial;

pub use order::DisplayOrder;
pub use runner::{Experiment, Outcome};
pub use scenario::Scenario;
pub use trial::{SimilarityLevel, Trial, Variants};
