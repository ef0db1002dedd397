use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::prompt::build_prompt;
use super::Generator;
use crate::config::STORED_LIMIT;
use crate::experiment::trial::SimilarityLevel;
use crate::outputs::text::truncate_stored;

/// One level's result, already in its stored form.
#[derive(Debug, Clone)]
pub struct GeneratedVariant {
    pub level: SimilarityLevel,
    pub text: String,
    pub succeeded: bool,
    pub latency: Duration,
}

/// Turns a scenario + response into one stored variant per level.
///
/// Backend failures do not fail the trial: the level gets an `Error: ...`
/// marker instead and the participant sees it like any other option.
pub struct VariantGenerator<G> {
    generator: G,
    stored_limit: usize,
}

impl<G: Generator> VariantGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self::with_limit(generator, STORED_LIMIT)
    }

    pub fn with_limit(generator: G, stored_limit: usize) -> Self {
        Self {
            generator,
            stored_limit,
        }
    }

    pub async fn generate_level(
        &self,
        level: SimilarityLevel,
        scenario: &str,
        response: &str,
    ) -> GeneratedVariant {
        let prompt = build_prompt(level, scenario, response);
        let started = Instant::now();
        let result = self.generator.generate(&prompt).await;
        let latency = started.elapsed();

        let (text, succeeded) = match result {
            Ok(text) => {
                debug!(%level, chars = text.chars().count(), ?latency, "variant generated");
                (text, true)
            }
            Err(e) => {
                warn!(%level, error = %e, "generation failed, storing error marker");
                (format!("Error: {}", e), false)
            }
        };

        GeneratedVariant {
            level,
            text: truncate_stored(&text, self.stored_limit),
            succeeded,
            latency,
        }
    }
}
