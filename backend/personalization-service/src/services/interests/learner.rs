use crate::config::LearningConfig;
use crate::models::WeightDelta;

/// Translates user actions into interest-weight deltas. Pure: callers
/// apply the returned deltas through `InterestStore::increment`, inside
/// the same logical transaction as the read/favorite mark itself.
pub struct InterestLearner {
    config: LearningConfig,
}

impl InterestLearner {
    pub fn new(config: LearningConfig) -> Self {
        Self { config }
    }

    /// A read event reinforces every keyword of the opened article with
    /// the configured implicit delta.
    pub fn on_read(&self, keywords: &[String]) -> Vec<WeightDelta> {
        keywords
            .iter()
            .map(|keyword| WeightDelta {
                keyword: keyword.clone(),
                implicit: self.config.read_delta,
                explicit: 0.0,
            })
            .collect()
    }

    /// A favorite event reinforces explicit weight only on the
    /// not-favorited → favorited transition. Un-favoriting returns no
    /// deltas: reinforcement is one-way and weights are never reversed.
    pub fn on_favorite(&self, keywords: &[String], now_favorited: bool) -> Vec<WeightDelta> {
        if !now_favorited {
            return Vec::new();
        }

        keywords
            .iter()
            .map(|keyword| WeightDelta {
                keyword: keyword.clone(),
                implicit: 0.0,
                explicit: self.config.favorite_delta,
            })
            .collect()
    }
}

impl Default for InterestLearner {
    fn default() -> Self {
        Self::new(LearningConfig::default())
    }
}
