pub mod catalog;
pub mod feedback;
pub mod mood_resolver;
pub mod providers;
pub mod ranker;
pub mod recommendations;
pub mod tfidf;
pub mod tokenizer;

pub use feedback::{CsvFeedbackLedger, FeedbackLedger, InMemoryFeedbackLedger};
pub use providers::ContentSearchProvider;
pub use recommendations::{Recommendation, Recommender};
