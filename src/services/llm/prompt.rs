use crate::experiment::trial::SimilarityLevel;

const HIGH_INSTRUCTION: &str = "Write a short alternative that is very similar in style, tone, and content to their response. 1 short sentence without additional explanation.";
const MEDIUM_INSTRUCTION: &str = "Write a short alternative that is somewhat similar in style and content to their response, but with some variations. 1 short sentence without additional explanation.";
const LOW_INSTRUCTION: &str = "Write a short alternative that is loosely related to their response but with different style or approach. 1 short sentence without additional explanation.";

pub fn instruction(level: SimilarityLevel) -> &'static str {
    match level {
        SimilarityLevel::High => HIGH_INSTRUCTION,
        SimilarityLevel::Medium => MEDIUM_INSTRUCTION,
        SimilarityLevel::Low => LOW_INSTRUCTION,
    }
}

/// Scenario and response go in verbatim, no escaping.
pub fn build_prompt(level: SimilarityLevel, scenario: &str, response: &str) -> String {
    format!(
        "Given the scenario: '{}'\n\nA person responded: '{}'\n\n{}",
        scenario,
        response,
        instruction(level)
    )
}
