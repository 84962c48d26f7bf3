use std::sync::Arc;

use crate::services::{ContentSearchProvider, FeedbackLedger, Recommender};

/// Shared application state
///
/// The recommender is read-only after startup; the ledger owns its own
/// synchronization.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub ledger: Arc<dyn FeedbackLedger>,
    pub search_provider: Option<Arc<dyn ContentSearchProvider>>,
    pub default_k: i64,
    pub external_result_limit: usize,
}

impl AppState {
    /// Creates state without an external search provider
    pub fn new(recommender: Recommender, ledger: Arc<dyn FeedbackLedger>) -> Self {
        Self {
            recommender: Arc::new(recommender),
            ledger,
            search_provider: None,
            default_k: 3,
            external_result_limit: 3,
        }
    }

    pub fn with_search_provider(mut self, provider: Arc<dyn ContentSearchProvider>) -> Self {
        self.search_provider = Some(provider);
        self
    }

    pub fn with_default_k(mut self, k: i64) -> Self {
        self.default_k = k;
        self
    }

    pub fn with_external_result_limit(mut self, limit: usize) -> Self {
        self.external_result_limit = limit;
        self
    }
}
