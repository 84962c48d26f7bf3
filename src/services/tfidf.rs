//! TF-IDF weighting over catalog tag strings.
//!
//! Term frequency is the raw occurrence count in the text being weighted.
//! Inverse document frequency uses the smoothed form
//! `ln((1 + N) / (1 + df)) + 1`, where `N` is the number of catalog items and
//! `df` the number of items containing the term. The same weights are used for
//! catalog items and queries.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
    error::{AppError, AppResult},
    models::Catalog,
    services::tokenizer::tokenize,
};

/// Sparse vector over the fitted vocabulary
///
/// Entries are `(column, weight)` pairs sorted by column with no zero weights,
/// so an empty vector is the zero vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedVector {
    entries: Vec<(usize, f64)>,
}

impl WeightedVector {
    /// The all-zero vector
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product, merging the two sorted entry lists
    pub fn dot(&self, other: &WeightedVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (col_a, w_a) = self.entries[i];
            let (col_b, w_b) = other.entries[j];
            match col_a.cmp(&col_b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += w_a * w_b;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Fitted vocabulary and IDF weights for one catalog
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfIndex {
    /// Terms in column order (lexicographic)
    terms: Vec<String>,
    columns: HashMap<String, usize>,
    idf: Vec<f64>,
    document_count: usize,
}

impl TfIdfIndex {
    /// Fits the vocabulary and IDF weights from the catalog's tag strings
    pub fn fit(catalog: &Catalog) -> AppResult<Self> {
        Self::fit_documents(catalog.items().iter().map(|item| item.tags.as_str()))
    }

    /// Fits over arbitrary documents
    ///
    /// Fails with `AppError::EmptyVocabulary` when no term survives stop word removal.
    pub fn fit_documents<'a, I>(documents: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        let mut document_count = 0;

        for document in documents {
            document_count += 1;
            let unique: HashSet<String> = tokenize(document).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(AppError::EmptyVocabulary);
        }

        let n = document_count as f64;
        let mut terms = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (term, df) in document_frequency {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            terms.push(term);
        }
        let columns = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        tracing::debug!(
            documents = document_count,
            vocabulary = terms.len(),
            "Fitted TF-IDF index"
        );

        Ok(Self {
            terms,
            columns,
            idf,
            document_count,
        })
    }

    /// Projects `text` onto the fitted vocabulary
    ///
    /// Unknown terms are dropped. Returns the zero vector when nothing matches.
    pub fn transform(&self, text: &str) -> WeightedVector {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&col) = self.columns.get(&token) {
                *counts.entry(col).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(col, count)| (col, f64::from(count) * self.idf[col]))
            .collect();
        WeightedVector { entries }
    }

    /// Vectors for every catalog item, keyed by item id
    pub fn catalog_vectors(&self, catalog: &Catalog) -> BTreeMap<u32, WeightedVector> {
        catalog
            .items()
            .iter()
            .map(|item| (item.id, self.transform(&item.tags)))
            .collect()
    }

    /// Vocabulary terms in column order
    pub fn vocabulary(&self) -> &[String] {
        &self.terms
    }

    /// IDF weight of `term`, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.columns.get(term).map(|&col| self.idf[col])
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }
}
