pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use services::{
    ArticleAssembler, FeedPersonalizer, InterestLearner, InterestStore, KeywordExtractor,
    MemoryInterestStore, RankingPipeline, ScoringEngine,
};
