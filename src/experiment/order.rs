use rand::seq::SliceRandom;
use rand::Rng;

use super::trial::SimilarityLevel;

/// Screen position -> level for one rating screen.
///
/// Shuffled once per trial so the position a participant tends to pick says
/// nothing about the level behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOrder([SimilarityLevel; 3]);

impl DisplayOrder {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut levels = SimilarityLevel::ALL;
        levels.shuffle(rng);
        Self(levels)
    }

    /// Fixed order, mainly for tests and replays.
    pub fn from_levels(levels: [SimilarityLevel; 3]) -> Option<Self> {
        let is_permutation = SimilarityLevel::ALL
            .iter()
            .all(|level| levels.contains(level));
        is_permutation.then_some(Self(levels))
    }

    pub fn levels(&self) -> &[SimilarityLevel; 3] {
        &self.0
    }

    /// Level shown at 1-based `position`, `None` outside 1..=3.
    pub fn level_at(&self, position: usize) -> Option<SimilarityLevel> {
        position
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .copied()
    }
}
