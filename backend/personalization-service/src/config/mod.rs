use serde::Deserialize;
use std::collections::HashSet;
use std::env;

/// Stopwords dropped during keyword extraction, overridable via the
/// `STOPWORDS` environment variable (comma-separated).
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is", "are",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
    pub learning: LearningConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Upper bound on keywords attached to an article.
    pub max_keywords: usize,
    /// Tokens shorter than this are dropped.
    pub min_token_len: usize,
    pub stopwords: HashSet<String>,
    /// Stored summary text is truncated to this many characters.
    pub summary_max_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Multiplier on implicit (read) weight in the affinity sum.
    pub click_weight: f64,
    /// Multiplier on explicit (favorite) weight in the affinity sum.
    pub favorite_weight: f64,
    /// e-folding window of the age decay applied to affinity.
    pub decay_days: f64,
    pub fresh_under_days: f64,
    pub recent_under_days: f64,
    pub fresh_bonus: f64,
    pub recent_bonus: f64,
    pub base_bonus: f64,
    /// Every article scores at least this, so it stays rankable.
    pub score_floor: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LearningConfig {
    /// Implicit weight added per keyword on a read event.
    pub read_delta: f64,
    /// Explicit weight added per keyword when an article becomes favorited.
    pub favorite_delta: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Cap on the ranked list returned to the request layer.
    pub max_feed_size: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            min_token_len: 4,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            summary_max_chars: 1000,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            click_weight: 0.8,
            favorite_weight: 0.3,
            decay_days: 30.0,
            fresh_under_days: 1.0,
            recent_under_days: 3.0,
            fresh_bonus: 5.0,
            recent_bonus: 2.0,
            base_bonus: 0.5,
            score_floor: 0.1,
        }
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            read_delta: 2.0,
            favorite_delta: 1.0,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { max_feed_size: 50 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            scoring: ScoringConfig::default(),
            learning: LearningConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Config::default();

        Config {
            extraction: ExtractionConfig {
                max_keywords: env_or("MAX_KEYWORDS", defaults.extraction.max_keywords),
                min_token_len: env_or("MIN_TOKEN_LEN", defaults.extraction.min_token_len),
                stopwords: stopwords_from_env(defaults.extraction.stopwords),
                summary_max_chars: env_or("SUMMARY_MAX_CHARS", defaults.extraction.summary_max_chars),
            },
            scoring: ScoringConfig {
                click_weight: env_or("CLICK_WEIGHT", defaults.scoring.click_weight),
                favorite_weight: env_or("FAVORITE_WEIGHT", defaults.scoring.favorite_weight),
                decay_days: env_or("DECAY_DAYS", defaults.scoring.decay_days),
                fresh_under_days: env_or("FRESH_UNDER_DAYS", defaults.scoring.fresh_under_days),
                recent_under_days: env_or("RECENT_UNDER_DAYS", defaults.scoring.recent_under_days),
                fresh_bonus: env_or("FRESH_BONUS", defaults.scoring.fresh_bonus),
                recent_bonus: env_or("RECENT_BONUS", defaults.scoring.recent_bonus),
                base_bonus: env_or("BASE_BONUS", defaults.scoring.base_bonus),
                score_floor: env_or("SCORE_FLOOR", defaults.scoring.score_floor),
            },
            learning: LearningConfig {
                read_delta: env_or("READ_DELTA", defaults.learning.read_delta),
                favorite_delta: env_or("FAVORITE_DELTA", defaults.learning.favorite_delta),
            },
            feed: FeedConfig {
                max_feed_size: env_or("MAX_FEED_SIZE", defaults.feed.max_feed_size),
            },
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{} must be a valid {}", key, std::any::type_name::<T>())),
        Err(_) => default,
    }
}

fn stopwords_from_env(default: HashSet<String>) -> HashSet<String> {
    match env::var("STOPWORDS") {
        Ok(raw) => raw
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => default,
    }
}
