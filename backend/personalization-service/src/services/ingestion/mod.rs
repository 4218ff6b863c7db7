// ============================================
// Article Assembly
// ============================================
//
// Builds immutable Article records from already-parsed feed entries:
// computes the dedup hash, attaches extracted keywords, truncates the
// stored summary. Fetching and XML parsing happen in the collaborator;
// only the personalization-relevant shaping lives here.

use crate::config::ExtractionConfig;
use crate::models::{Article, FeedEntry};
use crate::services::keywords::KeywordExtractor;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

/// Stable identity hash for deduplication: SHA-256 of
/// `"{normalized_url}:{title}"`, lowercase hex.
pub fn dedup_hash(url: &str, title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_url(url).as_bytes());
    hasher.update(b":");
    hasher.update(title.as_bytes());
    hex::encode(hasher.finalize())
}

/// Canonical URL form so trivially different links hash identically:
/// scheme and host lowercased, fragment dropped, a single trailing slash
/// dropped on non-root paths. Unparseable input falls back to the
/// trimmed raw string rather than failing.
fn normalize_url(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(mut url) => {
            url.set_fragment(None);
            let mut normalized = url.to_string();
            if url.path() != "/" && normalized.ends_with('/') {
                normalized.pop();
            }
            normalized
        }
        Err(_) => raw.trim().to_string(),
    }
}

pub struct ArticleAssembler {
    extractor: KeywordExtractor,
    summary_max_chars: usize,
}

impl ArticleAssembler {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            summary_max_chars: config.summary_max_chars,
            extractor: KeywordExtractor::new(config),
        }
    }

    /// Build the immutable article record for one feed entry.
    ///
    /// Keywords come from the title and summary combined, so a sparse
    /// summary still produces usable interest signals.
    pub fn assemble(&self, entry: FeedEntry, source: &str, now: DateTime<Utc>) -> Article {
        let id = dedup_hash(&entry.url, &entry.title);
        let keywords = self
            .extractor
            .extract(&format!("{} {}", entry.title, entry.summary));

        debug!(
            article_id = %id,
            source = source,
            keyword_count = keywords.len(),
            "article assembled"
        );

        Article {
            id,
            title: entry.title,
            url: entry.url,
            summary: entry.summary.chars().take(self.summary_max_chars).collect(),
            source: source.to_string(),
            author: entry.author,
            published_at: entry.published_at,
            ingested_at: now,
            keywords,
        }
    }
}

impl Default for ArticleAssembler {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}
