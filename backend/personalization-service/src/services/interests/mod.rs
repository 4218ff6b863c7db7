// ============================================
// Interest Store
// ============================================
//
// Per-(user, keyword) implicit/explicit weight rows behind a storage
// trait. The only mutation path is `increment`, an atomic upsert:
// concurrent increments for the same key must serialize so no delta is
// lost. Stored weights never decay and are monotonically non-decreasing
// under the current update rules.

pub mod learner;

pub use learner::InterestLearner;

use crate::models::{InterestProfile, InterestWeights};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InterestError {
    #[error("unknown user: {0}")]
    UnknownUser(Uuid),

    #[error("negative delta rejected: {0}")]
    InvalidDelta(f64),

    #[error("store backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, InterestError>;

#[async_trait]
pub trait InterestStore: Send + Sync {
    /// Weights for one (user, keyword) pair; zero weights when no signal
    /// has been recorded yet.
    async fn get(&self, user_id: Uuid, keyword: &str) -> Result<InterestWeights>;

    /// Full keyword → weights map for a user. Empty for a user with no
    /// history, so a cold-start feed still ranks on recency alone.
    async fn profile(&self, user_id: Uuid) -> Result<InterestProfile>;

    /// Atomic upsert: create the row on first signal, otherwise add the
    /// deltas to existing weights and refresh the update timestamp.
    /// Deltas must be non-negative; the keyword row is always creatable,
    /// only an unknown user is an error.
    async fn increment(
        &self,
        user_id: Uuid,
        keyword: &str,
        implicit_delta: f64,
        explicit_delta: f64,
    ) -> Result<InterestWeights>;
}

#[derive(Debug, Clone)]
struct InterestRow {
    weights: InterestWeights,
    last_updated: DateTime<Utc>,
}

/// In-memory interest store.
///
/// One map entry per user; `DashMap::get_mut` holds the shard lock for
/// the duration of a row update, which serializes concurrent increments
/// on the same key. Database-backed stores implement the same trait with
/// an upsert inside the caller's transaction.
#[derive(Default)]
pub struct MemoryInterestStore {
    rows: DashMap<Uuid, HashMap<String, InterestRow>>,
}

impl MemoryInterestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users are provisioned by the account collaborator; the store only
    /// needs to know they exist so `increment` can reject bad ids.
    pub fn register_user(&self, user_id: Uuid) {
        self.rows.entry(user_id).or_default();
    }

    pub fn last_updated(&self, user_id: Uuid, keyword: &str) -> Option<DateTime<Utc>> {
        self.rows
            .get(&user_id)
            .and_then(|rows| rows.get(keyword).map(|row| row.last_updated))
    }
}

#[async_trait]
impl InterestStore for MemoryInterestStore {
    async fn get(&self, user_id: Uuid, keyword: &str) -> Result<InterestWeights> {
        Ok(self
            .rows
            .get(&user_id)
            .and_then(|rows| rows.get(keyword).map(|row| row.weights))
            .unwrap_or_default())
    }

    async fn profile(&self, user_id: Uuid) -> Result<InterestProfile> {
        Ok(self
            .rows
            .get(&user_id)
            .map(|rows| {
                rows.iter()
                    .map(|(keyword, row)| (keyword.clone(), row.weights))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn increment(
        &self,
        user_id: Uuid,
        keyword: &str,
        implicit_delta: f64,
        explicit_delta: f64,
    ) -> Result<InterestWeights> {
        if implicit_delta < 0.0 {
            return Err(InterestError::InvalidDelta(implicit_delta));
        }
        if explicit_delta < 0.0 {
            return Err(InterestError::InvalidDelta(explicit_delta));
        }

        let mut rows = self
            .rows
            .get_mut(&user_id)
            .ok_or(InterestError::UnknownUser(user_id))?;

        let row = rows.entry(keyword.to_string()).or_insert_with(|| InterestRow {
            weights: InterestWeights::default(),
            last_updated: Utc::now(),
        });

        row.weights.implicit += implicit_delta;
        row.weights.explicit += explicit_delta;
        row.last_updated = Utc::now();

        debug!(
            user_id = %user_id,
            keyword = keyword,
            implicit = row.weights.implicit,
            explicit = row.weights.explicit,
            "interest weights updated"
        );

        Ok(row.weights)
    }
}
