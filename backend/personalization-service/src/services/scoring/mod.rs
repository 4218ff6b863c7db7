// ============================================
// Scoring Engine
// ============================================
//
// Relevance score for one article against one user's interest profile:
//
//   affinity = SUM over article keywords of
//              implicit * click_weight + explicit * favorite_weight
//   score    = affinity * exp(-age_days / decay_days) + recency_bonus
//   result   = max(score, score_floor)
//
// Decay applies to the affinity term only; the recency bonus is a fixed
// additive credit per age tier so fresh articles surface even for users
// with no interest history. Pure and deterministic: the caller supplies
// the age, there are no clock reads here.

use crate::config::ScoringConfig;
use crate::models::InterestProfile;
use crate::utils::exponential_decay;

pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score an article from its keywords, the user's interest map, and
    /// its age in days. Keywords absent from the map contribute zero, so
    /// a user with no history scores every article on recency alone.
    /// Negative ages (clock skew on freshly ingested items) clamp to 0.
    pub fn score(&self, keywords: &[String], interests: &InterestProfile, age_days: f64) -> f64 {
        let age_days = age_days.max(0.0);

        let mut affinity = 0.0;
        for keyword in keywords {
            if let Some(weights) = interests.get(keyword) {
                affinity += weights.implicit * self.config.click_weight
                    + weights.explicit * self.config.favorite_weight;
            }
        }

        affinity *= exponential_decay(age_days, self.config.decay_days);

        let score = affinity + self.recency_bonus(age_days);

        score.max(self.config.score_floor)
    }

    fn recency_bonus(&self, age_days: f64) -> f64 {
        if age_days < self.config.fresh_under_days {
            self.config.fresh_bonus
        } else if age_days < self.config.recent_under_days {
            self.config.recent_bonus
        } else {
            self.config.base_bonus
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InterestWeights;
    use std::collections::HashMap;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn profile(entries: &[(&str, f64, f64)]) -> InterestProfile {
        entries
            .iter()
            .map(|(keyword, implicit, explicit)| {
                (
                    keyword.to_string(),
                    InterestWeights {
                        implicit: *implicit,
                        explicit: *explicit,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_fresh_article_with_interest_history() {
        // affinity = 5.0 * 0.8 = 4.0, decay = 1.0, fresh bonus = 5.0
        let engine = ScoringEngine::default();
        let interests = profile(&[("election", 5.0, 0.0)]);

        let score = engine.score(&keywords(&["election", "climate"]), &interests, 0.0);

        assert!((score - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_ten_day_old_article_decays() {
        // decay = exp(-10/30) ~ 0.716, affinity ~ 2.87, bonus = 0.5
        let engine = ScoringEngine::default();
        let interests = profile(&[("election", 5.0, 0.0)]);

        let score = engine.score(&keywords(&["election", "climate"]), &interests, 10.0);

        assert!((score - 3.366).abs() < 0.01);
    }

    #[test]
    fn test_no_keywords_scores_recency_bonus_alone() {
        let engine = ScoringEngine::default();
        let interests = profile(&[("election", 5.0, 0.0)]);

        let score = engine.score(&[], &interests, 0.0);

        assert!((score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_interest_history_never_fails() {
        let engine = ScoringEngine::default();
        let interests = HashMap::new();

        let score = engine.score(&keywords(&["election"]), &interests, 2.0);

        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_floor_holds_for_stale_unmatched_articles() {
        let config = ScoringConfig {
            base_bonus: 0.0,
            ..ScoringConfig::default()
        };
        let engine = ScoringEngine::new(config);

        let score = engine.score(&keywords(&["election"]), &HashMap::new(), 365.0);

        assert_eq!(score, 0.1);
    }

    #[test]
    fn test_score_monotonically_decreases_with_age() {
        let engine = ScoringEngine::default();
        let interests = profile(&[("election", 5.0, 2.0)]);
        let kw = keywords(&["election"]);

        let ages = [0.0, 0.5, 0.99, 1.0, 2.0, 2.99, 3.0, 10.0, 30.0, 90.0];
        let scores: Vec<f64> = ages
            .iter()
            .map(|age| engine.score(&kw, &interests, *age))
            .collect();

        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "score increased with age: {:?}", pair);
        }
        // Strict decrease within a tier while affinity is positive
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_more_interest_weight_never_lowers_score() {
        let engine = ScoringEngine::default();
        let kw = keywords(&["election", "climate"]);

        let base = engine.score(&kw, &profile(&[("election", 5.0, 0.0)]), 4.0);
        let more_implicit = engine.score(&kw, &profile(&[("election", 6.0, 0.0)]), 4.0);
        let more_explicit = engine.score(&kw, &profile(&[("election", 5.0, 1.0)]), 4.0);
        // Weight on a keyword the article does not contain
        let unrelated = engine.score(
            &kw,
            &profile(&[("election", 5.0, 0.0), ("sports", 9.0, 9.0)]),
            4.0,
        );

        assert!(more_implicit > base);
        assert!(more_explicit > base);
        assert_eq!(unrelated, base);
    }

    #[test]
    fn test_recency_tier_boundaries() {
        let engine = ScoringEngine::default();
        let interests = HashMap::new();
        let kw = keywords(&["election"]);

        assert_eq!(engine.score(&kw, &interests, 0.0), 5.0);
        assert_eq!(engine.score(&kw, &interests, 1.0), 2.0);
        assert_eq!(engine.score(&kw, &interests, 2.999), 2.0);
        assert_eq!(engine.score(&kw, &interests, 3.0), 0.5);
    }

    #[test]
    fn test_nan_affinity_floors_instead_of_propagating() {
        let engine = ScoringEngine::default();
        let interests = profile(&[("election", f64::NAN, 0.0)]);

        let score = engine.score(&keywords(&["election"]), &interests, 10.0);

        assert_eq!(score, 0.1);
    }

    #[test]
    fn test_negative_age_clamps_to_fresh() {
        let engine = ScoringEngine::default();
        let interests = profile(&[("election", 5.0, 0.0)]);

        let skewed = engine.score(&keywords(&["election"]), &interests, -0.5);
        let fresh = engine.score(&keywords(&["election"]), &interests, 0.0);

        assert_eq!(skewed, fresh);
    }
}
