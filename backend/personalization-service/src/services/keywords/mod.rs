// ============================================
// Keyword Extractor
// ============================================
//
// Turns raw article text (title + summary, possibly with markup) into a
// bounded, ordered set of salient keywords. Keywords are the unit of
// interest matching everywhere downstream, so extraction must be
// deterministic: identical input text yields the identical sequence on
// every call.

use crate::config::ExtractionConfig;
use regex::Regex;
use std::collections::HashSet;

pub struct KeywordExtractor {
    config: ExtractionConfig,
    tag_re: Regex,
}

impl KeywordExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            tag_re: Regex::new(r"<[^>]+>").expect("tag pattern must compile"),
            config,
        }
    }

    /// Extract up to `max_keywords` unique tokens in first-seen order.
    ///
    /// Markup tags are stripped, text is lowercased, punctuation removed,
    /// short tokens and stopwords dropped. Never fails: degenerate input
    /// yields an empty list and the article still ranks on recency alone.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let stripped = self.tag_re.replace_all(text, " ");
        let lowered = stripped.to_lowercase();

        let mut seen: HashSet<String> = HashSet::new();
        let mut keywords = Vec::new();

        for raw in lowered.split_whitespace() {
            let token: String = raw.chars().filter(|c| c.is_alphanumeric()).collect();

            if token.chars().count() < self.config.min_token_len {
                continue;
            }
            if self.config.stopwords.contains(token.as_str()) {
                continue;
            }
            if seen.insert(token.clone()) {
                keywords.push(token);
                if keywords.len() == self.config.max_keywords {
                    break;
                }
            }
        }

        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}
