use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    services::tfidf::WeightedVector,
};

/// Similarity of one catalog item to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub id: u32,
    pub score: f64,
}

/// Cosine similarity, defined as 0 when either vector has zero magnitude
pub fn cosine_similarity(a: &WeightedVector, b: &WeightedVector) -> f64 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(0.0, 1.0)
}

/// Scores every catalog vector against `query` and keeps the best `k`
///
/// Ordered by descending score, ties by ascending id. A zero query still
/// yields `min(k, catalog size)` results, all scored 0.
pub fn rank(
    query: &WeightedVector,
    catalog_vectors: &BTreeMap<u32, WeightedVector>,
    k: usize,
) -> AppResult<Vec<Scored>> {
    if k == 0 {
        return Err(AppError::InvalidArgument("k must be at least 1".to_string()));
    }

    let mut scored: Vec<Scored> = catalog_vectors
        .iter()
        .map(|(&id, vector)| Scored {
            id,
            score: cosine_similarity(query, vector),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
    scored.truncate(k);

    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tfidf::TfIdfIndex;

    fn setup(docs: &[(u32, &str)]) -> (TfIdfIndex, BTreeMap<u32, WeightedVector>) {
        let index = TfIdfIndex::fit_documents(docs.iter().map(|(_, tags)| *tags)).unwrap();
        let vectors = docs
            .iter()
            .map(|(id, tags)| (*id, index.transform(tags)))
            .collect();
        (index, vectors)
    }

    #[test]
    fn test_cosine_of_identical_vectors() {
        let (index, _) = setup(&[(1, "calm focus"), (2, "sleep")]);
        let v = index.transform("calm focus");
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_with_zero_vector() {
        let (index, _) = setup(&[(1, "calm")]);
        let v = index.transform("calm");
        assert_eq!(cosine_similarity(&v, &WeightedVector::zero()), 0.0);
        assert_eq!(
            cosine_similarity(&WeightedVector::zero(), &WeightedVector::zero()),
            0.0
        );
    }

    #[test]
    fn test_rank_orders_by_score() {
        let (index, vectors) = setup(&[(1, "focus study"), (2, "calm sleep"), (3, "calm")]);
        let ranked = rank(&index.transform("calm"), &vectors, 3).unwrap();
        let ids: Vec<u32> = ranked.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!((ranked[0].score - 1.0).abs() < 1e-12);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_rank_breaks_ties_by_id() {
        let (index, vectors) = setup(&[(7, "calm"), (2, "calm"), (5, "calm")]);
        let ranked = rank(&index.transform("calm"), &vectors, 3).unwrap();
        let ids: Vec<u32> = ranked.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }

    #[test]
    fn test_rank_zero_query_returns_k_results() {
        let (_, vectors) = setup(&[(1, "calm"), (2, "focus"), (3, "sleep")]);
        let ranked = rank(&WeightedVector::zero(), &vectors, 2).unwrap();
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| s.score == 0.0));
        assert_eq!(ranked[0].id, 1);
        assert_eq!(ranked[1].id, 2);
    }

    #[test]
    fn test_rank_k_larger_than_catalog() {
        let (index, vectors) = setup(&[(1, "calm"), (2, "focus")]);
        let ranked = rank(&index.transform("calm"), &vectors, 10).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_empty_catalog() {
        let ranked = rank(&WeightedVector::zero(), &BTreeMap::new(), 3).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_rejects_zero_k() {
        let (index, vectors) = setup(&[(1, "calm")]);
        assert!(matches!(
            rank(&index.transform("calm"), &vectors, 0),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
