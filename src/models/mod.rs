pub mod content;
pub mod feedback;
pub mod mood;
pub mod recommendation;

pub use content::{Catalog, ContentItem};
pub use feedback::{FeedbackRecord, FeedbackSummary};
pub use mood::MoodCategory;
pub use recommendation::{
    ExternalContent, FeedbackRequest, RankedResult, RecommendationRequest,
    RecommendationResponse,
};
