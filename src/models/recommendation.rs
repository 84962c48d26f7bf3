use serde::{Deserialize, Serialize};

use super::{ContentItem, MoodCategory};

/// A catalog item together with its similarity to the query
///
/// `confidence` is a cosine similarity in `[0, 1]`. It is only comparable
/// with other results from the same ranking call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedResult {
    pub item: ContentItem,
    pub confidence: f64,
}

/// Content returned by an external search provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalContent {
    pub title: String,
    pub link: String,
}

/// Body of a recommendation request
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub mood: String,
    #[serde(default)]
    pub free_text: String,
    pub k: Option<i64>,
}

/// Body of a recommendation response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub mood: MoodCategory,
    pub target_mood: String,
    pub results: Vec<RankedResult>,
    /// Optional augmentation; empty when no provider is configured or it failed
    pub external: Vec<ExternalContent>,
}

/// Body of a feedback request
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub before_mood: String,
    pub after_mood: String,
    pub satisfied: i64,
}
