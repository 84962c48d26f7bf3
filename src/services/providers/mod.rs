//! External content search
//!
//! Optional augmentation next to the catalog ranking. Providers are only
//! consulted after the ranking is computed and their failures never reach
//! the caller: `augment` degrades them to an empty list.

use std::sync::Arc;

use crate::{error::AppResult, models::ExternalContent};

pub mod youtube;

pub use youtube::YouTubeProvider;

/// Trait for external content search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContentSearchProvider: Send + Sync {
    /// Search for content matching `query`, returning at most `max_results` hits
    async fn search(&self, query: &str, max_results: usize) -> AppResult<Vec<ExternalContent>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Runs an optional provider, treating absence and failure as no results
pub async fn augment(
    provider: Option<&Arc<dyn ContentSearchProvider>>,
    query: &str,
    max_results: usize,
) -> Vec<ExternalContent> {
    let Some(provider) = provider else {
        return Vec::new();
    };
    if query.trim().is_empty() || max_results == 0 {
        return Vec::new();
    }

    match provider.search(query, max_results).await {
        Ok(mut content) => {
            content.truncate(max_results);
            content
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "External content search failed"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn item(title: &str) -> ExternalContent {
        ExternalContent {
            title: title.to_string(),
            link: format!("https://example.com/{}", title),
        }
    }

    #[tokio::test]
    async fn test_no_provider_is_empty() {
        assert!(augment(None, "calm", 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty() {
        let mut mock = MockContentSearchProvider::new();
        mock.expect_search()
            .returning(|_, _| Err(AppError::ExternalApi("quota exceeded".to_string())));
        mock.expect_name().return_const("mock");

        let provider: Arc<dyn ContentSearchProvider> = Arc::new(mock);
        assert!(augment(Some(&provider), "calm", 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_results_are_capped() {
        let mut mock = MockContentSearchProvider::new();
        mock.expect_search()
            .withf(|query, max| query == "sleep better" && *max == 2)
            .returning(|_, _| Ok(vec![item("a"), item("b"), item("c")]));

        let provider: Arc<dyn ContentSearchProvider> = Arc::new(mock);
        let content = augment(Some(&provider), "sleep better", 2).await;
        assert_eq!(content, vec![item("a"), item("b")]);
    }

    #[tokio::test]
    async fn test_blank_query_skips_provider() {
        let mut mock = MockContentSearchProvider::new();
        mock.expect_search().never();

        let provider: Arc<dyn ContentSearchProvider> = Arc::new(mock);
        assert!(augment(Some(&provider), "   ", 3).await.is_empty());
    }
}
