pub mod feed;
pub mod ingestion;
pub mod interests;
pub mod keywords;
pub mod ranking;
pub mod scoring;

pub use feed::FeedPersonalizer;
pub use ingestion::ArticleAssembler;
pub use interests::{InterestLearner, InterestStore, MemoryInterestStore};
pub use keywords::KeywordExtractor;
pub use ranking::RankingPipeline;
pub use scoring::ScoringEngine;
