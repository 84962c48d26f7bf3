use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, MoodCategory, RankedResult},
    services::{
        mood_resolver, ranker,
        tfidf::{TfIdfIndex, WeightedVector},
    },
};

/// Mood-driven content ranking over a fixed catalog
///
/// Owns the catalog together with its fitted index and cached item vectors.
/// Requests only read from it, so one instance serves the whole process.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    index: TfIdfIndex,
    catalog_vectors: BTreeMap<u32, WeightedVector>,
}

/// Output of one recommendation request
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub mood: MoodCategory,
    pub results: Vec<RankedResult>,
}

impl Recommender {
    /// Fits the index over `catalog` and caches every item vector
    pub fn new(catalog: Catalog) -> AppResult<Self> {
        let index = TfIdfIndex::fit(&catalog)?;
        let catalog_vectors = index.catalog_vectors(&catalog);

        tracing::info!(
            items = catalog.len(),
            vocabulary = index.vocabulary().len(),
            "Recommender ready"
        );

        Ok(Self {
            catalog,
            index,
            catalog_vectors,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &TfIdfIndex {
        &self.index
    }

    /// Ranks the catalog for a reported mood and free-text intent
    ///
    /// The query is the mood's target tags followed by `free_text`. Returns at
    /// most `k` results; `k < 1` fails with `AppError::InvalidArgument`.
    pub fn get_recommendations(
        &self,
        mood: &str,
        free_text: &str,
        k: i64,
    ) -> AppResult<Recommendation> {
        let mood: MoodCategory = mood.parse()?;
        let k = usize::try_from(k)
            .ok()
            .filter(|&k| k >= 1)
            .ok_or_else(|| AppError::InvalidArgument(format!("k must be at least 1, got {}", k)))?;

        let query = format!("{} {}", mood_resolver::target_tags(mood), free_text);
        let query_vector = self.index.transform(&query);
        if query_vector.is_zero() {
            tracing::debug!(mood = %mood, "Query shares no terms with the catalog");
        }

        let results = ranker::rank(&query_vector, &self.catalog_vectors, k)?
            .into_iter()
            .filter_map(|scored| {
                self.catalog.get(scored.id).map(|item| RankedResult {
                    item: item.clone(),
                    confidence: scored.score,
                })
            })
            .collect();

        Ok(Recommendation { mood, results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentItem;
    use crate::services::catalog;

    fn scenario_catalog() -> Catalog {
        Catalog::new(vec![
            ContentItem::new(1, "Study Beats", "https://one", "Audio (Focus)", "Focus Calm Study"),
            ContentItem::new(2, "Morning Boost", "https://two", "Video", "Uplifting Energy Joy"),
            ContentItem::new(3, "Wind Down", "https://three", "Audio (Sleep)", "Calm Relaxation Sleep"),
        ])
        .unwrap()
    }

    fn ids(recommendation: &Recommendation) -> Vec<u32> {
        recommendation.results.iter().map(|r| r.item.id).collect()
    }

    #[test]
    fn test_anxious_scenario_excludes_unrelated_item() {
        let recommender = Recommender::new(scenario_catalog()).unwrap();
        let rec = recommender
            .get_recommendations("Anxious/Stressed", "", 2)
            .unwrap();

        // "calm"+"focus" and "calm"+"relaxation" carry equal weight, so the id breaks the tie
        assert_eq!(ids(&rec), vec![1, 3]);
        assert_eq!(rec.results[0].confidence, rec.results[1].confidence);
        assert!(rec.results.iter().all(|r| r.confidence > 0.0));
    }

    #[test]
    fn test_free_text_shifts_ranking() {
        let recommender = Recommender::new(scenario_catalog()).unwrap();
        let rec = recommender
            .get_recommendations("Anxious/Stressed", "I want to sleep", 2)
            .unwrap();
        assert_eq!(ids(&rec), vec![3, 1]);
        assert!(rec.results[0].confidence > rec.results[1].confidence);
    }

    #[test]
    fn test_unmatched_query_still_returns_k() {
        let catalog = Catalog::new(vec![
            ContentItem::new(1, "A", "https://a", "Audio", "ocean waves"),
            ContentItem::new(2, "B", "https://b", "Audio", "forest birds"),
        ])
        .unwrap();
        let recommender = Recommender::new(catalog).unwrap();
        let rec = recommender
            .get_recommendations("Sad/Low", "zzz", 5)
            .unwrap();
        assert_eq!(ids(&rec), vec![1, 2]);
        assert!(rec.results.iter().all(|r| r.confidence == 0.0));
    }

    #[test]
    fn test_rejects_non_positive_k() {
        let recommender = Recommender::new(catalog::load()).unwrap();
        for k in [0, -1] {
            assert!(matches!(
                recommender.get_recommendations("Sad/Low", "", k),
                Err(AppError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_rejects_unknown_mood() {
        let recommender = Recommender::new(catalog::load()).unwrap();
        assert!(matches!(
            recommender.get_recommendations("Elated", "", 3),
            Err(AppError::InvalidMood(_))
        ));
    }

    #[test]
    fn test_empty_vocabulary_catalog() {
        let catalog = Catalog::new(vec![ContentItem::new(1, "A", "https://a", "Audio", "the and of")])
            .unwrap();
        assert!(matches!(
            Recommender::new(catalog),
            Err(AppError::EmptyVocabulary)
        ));
    }

    #[test]
    fn test_results_are_deterministic_and_ordered() {
        let recommender = Recommender::new(catalog::load()).unwrap();
        for mood in MoodCategory::ALL {
            let first = recommender
                .get_recommendations(mood.label(), "calm focus", 5)
                .unwrap();
            let second = recommender
                .get_recommendations(mood.label(), "calm focus", 5)
                .unwrap();
            assert_eq!(first, second);
            assert_eq!(first.results.len(), 5);

            for pair in first.results.windows(2) {
                assert!(pair[0].confidence >= pair[1].confidence);
                if pair[0].confidence == pair[1].confidence {
                    assert!(pair[0].item.id < pair[1].item.id);
                }
            }
            assert!(first.results[0].confidence > 0.0);
        }
    }

    #[test]
    fn test_tired_prefers_sleep_content() {
        let recommender = Recommender::new(catalog::load()).unwrap();
        let rec = recommender
            .get_recommendations("Tired/Insomnia", "", 3)
            .unwrap();
        assert!(rec.results[0].item.tags.contains("Sleep"));
    }
}
