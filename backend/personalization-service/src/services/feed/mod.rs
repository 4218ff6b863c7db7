// ============================================
// Feed Personalizer
// ============================================
//
// Facade the request layer calls: rank a user's unread candidates, and
// turn read/favorite actions into interest-weight updates. Composes the
// pure scoring pipeline with the interest store; holds no state of its
// own beyond configuration.

use crate::config::Config;
use crate::models::{Candidate, RankedArticle};
use crate::services::interests::{InterestError, InterestLearner, InterestStore};
use crate::services::ranking::RankingPipeline;
use crate::services::scoring::ScoringEngine;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error(transparent)]
    Interest(#[from] InterestError),
}

pub type Result<T> = std::result::Result<T, FeedError>;

pub struct FeedPersonalizer {
    store: Arc<dyn InterestStore>,
    learner: InterestLearner,
    pipeline: RankingPipeline,
    max_feed_size: usize,
}

impl FeedPersonalizer {
    pub fn new(config: Config, store: Arc<dyn InterestStore>) -> Self {
        Self {
            learner: InterestLearner::new(config.learning),
            pipeline: RankingPipeline::new(ScoringEngine::new(config.scoring)),
            max_feed_size: config.feed.max_feed_size,
            store,
        }
    }

    /// Rank the user's unread candidates, best first, capped at the
    /// configured feed size. The candidate set comes from the read-state
    /// collaborator; an absent collection is a caller bug, an empty one
    /// is a valid empty feed.
    pub async fn rank_unread(
        &self,
        user_id: Uuid,
        candidates: Option<Vec<Candidate>>,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedArticle>> {
        let candidates =
            candidates.ok_or(FeedError::InvalidInput("candidate collection is required"))?;

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let interests = self.store.profile(user_id).await?;
        let mut ranked = self.pipeline.rank(&candidates, &interests, now);
        ranked.truncate(self.max_feed_size);

        debug!(
            user_id = %user_id,
            candidate_count = candidates.len(),
            returned = ranked.len(),
            "unread feed ranked"
        );

        Ok(ranked)
    }

    /// Apply the implicit reinforcement for a read event. The request
    /// layer invokes this in the same logical transaction as writing the
    /// read mark, so weights and read state never diverge.
    pub async fn record_read(&self, user_id: Uuid, article_keywords: &[String]) -> Result<()> {
        for delta in self.learner.on_read(article_keywords) {
            self.store
                .increment(user_id, &delta.keyword, delta.implicit, delta.explicit)
                .await?;
        }
        Ok(())
    }

    /// Apply the explicit reinforcement for a favorite toggle.
    /// `now_favorited` is the state after the toggle; un-favoriting
    /// applies nothing.
    pub async fn toggle_favorite(
        &self,
        user_id: Uuid,
        article_keywords: &[String],
        now_favorited: bool,
    ) -> Result<()> {
        for delta in self.learner.on_favorite(article_keywords, now_favorited) {
            self.store
                .increment(user_id, &delta.keyword, delta.implicit, delta.explicit)
                .await?;
        }
        Ok(())
    }
}
