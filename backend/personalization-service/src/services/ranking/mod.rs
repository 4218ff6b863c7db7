//! Ranking Pipeline
//!
//! Scores every unread candidate against the user's interest profile and
//! returns a descending total order. Candidates are exactly what the
//! read-state collaborator supplied; no filtering is recomputed here.
//!
//! Ordering is stable: equal scores keep the input (ingestion) order, so
//! repeated calls on identical input always produce the same list.

use crate::models::{Candidate, InterestProfile, RankedArticle};
use crate::services::scoring::ScoringEngine;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

const SECONDS_PER_DAY: f64 = 86_400.0;

pub struct RankingPipeline {
    scorer: ScoringEngine,
}

impl RankingPipeline {
    pub fn new(scorer: ScoringEngine) -> Self {
        Self { scorer }
    }

    /// Rank candidates best-first. Cost is linear in the candidate count
    /// and the call is idempotent for a fixed `now`.
    ///
    /// A malformed candidate (missing id, non-finite score from corrupt
    /// weights) is skipped with a logged anomaly rather than aborting
    /// the whole pass.
    pub fn rank(
        &self,
        candidates: &[Candidate],
        interests: &InterestProfile,
        now: DateTime<Utc>,
    ) -> Vec<RankedArticle> {
        let mut ranked: Vec<RankedArticle> = candidates
            .iter()
            .filter_map(|candidate| self.score_candidate(candidate, interests, now))
            .collect();

        // Stable sort: ties preserve ingestion order.
        // NaN never reaches the comparator, non-finite scores are skipped above.
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            candidate_count = candidates.len(),
            ranked_count = ranked.len(),
            top_score = ranked.first().map(|r| r.score),
            "ranking pass complete"
        );

        ranked
    }

    fn score_candidate(
        &self,
        candidate: &Candidate,
        interests: &InterestProfile,
        now: DateTime<Utc>,
    ) -> Option<RankedArticle> {
        if candidate.article_id.is_empty() {
            warn!("skipping candidate without an article id");
            return None;
        }

        let age_days = (now - candidate.ingested_at).num_seconds() as f64 / SECONDS_PER_DAY;
        let score = self.scorer.score(&candidate.keywords, interests, age_days);

        if !score.is_finite() {
            warn!(
                article_id = %candidate.article_id,
                score,
                "skipping candidate with non-finite score"
            );
            return None;
        }

        Some(RankedArticle {
            article_id: candidate.article_id.clone(),
            score,
        })
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(ScoringEngine::default())
    }
}
