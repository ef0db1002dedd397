use serde::{Deserialize, Serialize};
use std::fmt;

/// How close a generated variant is asked to stay to the participant's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityLevel {
    High,
    Medium,
    Low,
}

impl SimilarityLevel {
    /// Canonical order: generation order and CSV column order.
    pub const ALL: [SimilarityLevel; 3] = [
        SimilarityLevel::High,
        SimilarityLevel::Medium,
        SimilarityLevel::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityLevel::High => "high",
            SimilarityLevel::Medium => "medium",
            SimilarityLevel::Low => "low",
        }
    }
}

impl fmt::Display for SimilarityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three generated strings of a trial, one per level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variants {
    pub high: String,
    pub medium: String,
    pub low: String,
}

impl Variants {
    pub fn get(&self, level: SimilarityLevel) -> &str {
        match level {
            SimilarityLevel::High => &self.high,
            SimilarityLevel::Medium => &self.medium,
            SimilarityLevel::Low => &self.low,
        }
    }

    pub fn set(&mut self, level: SimilarityLevel, text: String) {
        match level {
            SimilarityLevel::High => self.high = text,
            SimilarityLevel::Medium => self.medium = text,
            SimilarityLevel::Low => self.low = text,
        }
    }

    /// (level, text) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SimilarityLevel, &str)> + '_ {
        SimilarityLevel::ALL.into_iter().map(move |level| (level, self.get(level)))
    }
}

/// A finished trial, ready to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    pub scenario: String,
    pub response: String,
    pub variants: Variants,
    pub selected: SimilarityLevel,
}
