use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Already-parsed feed item handed over by the fetch collaborator.
/// Network fetching and XML parsing happen upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Immutable article record produced at ingestion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// SHA-256 of `"{normalized_url}:{title}"`, unique across all articles.
    /// The persistence collaborator uses it to skip duplicates.
    pub id: String,
    pub title: String,
    pub url: String,
    pub summary: String,
    /// Reference to the feed this article came from.
    pub source: String,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub ingested_at: DateTime<Utc>,
    /// Extracted keywords in first-seen order, at most `max_keywords`.
    pub keywords: Vec<String>,
}

/// Accumulated interest strength for one (user, keyword) pair.
///
/// Weights never decay in storage; decay is applied at scoring time
/// against article age only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestWeights {
    /// Inferred from passive reading behavior.
    pub implicit: f64,
    /// Inferred from active favoriting.
    pub explicit: f64,
}

/// A user's full keyword → weights view, loaded once per ranking pass.
pub type InterestProfile = HashMap<String, InterestWeights>;

/// What the ranking pipeline needs per unread article. The read-state
/// filter that produced the candidate set belongs to the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub article_id: String,
    pub keywords: Vec<String>,
    pub ingested_at: DateTime<Utc>,
}

impl From<&Article> for Candidate {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id.clone(),
            keywords: article.keywords.clone(),
            ingested_at: article.ingested_at,
        }
    }
}

/// One row of ranked output. The request layer re-attaches display
/// fields (title, link, feed name) itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedArticle {
    pub article_id: String,
    pub score: f64,
}

/// A pending weight update produced by the learner, applied through
/// `InterestStore::increment`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightDelta {
    pub keyword: String,
    pub implicit: f64,
    pub explicit: f64,
}
