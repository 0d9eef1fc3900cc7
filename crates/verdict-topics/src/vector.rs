//! TF-IDF document vectors.
//!
//! Each non-empty document becomes one row. Weights use the smoothed inverse
//! document frequency
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! where `n` is the number of non-empty documents. Rows are L2-normalized and
//! columns follow the lexicographic order of the vocabulary.

use std::collections::{BTreeMap, HashSet};

use ndarray::{Array2, ArrayView1};

use crate::{ClusterError, Corpus};

/// A TF-IDF matrix over the non-empty documents of a corpus.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    /// Column terms, sorted.
    vocabulary: Vec<String>,
    /// Review index of each row.
    documents: Vec<usize>,
    /// One L2-normalized row per document.
    rows: Array2<f64>,
}

impl TfIdfMatrix {
    /// Vectorizes the non-empty documents of `corpus`.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::NoDocuments`] when every document is empty.
    pub fn fit(corpus: &Corpus) -> Result<Self, ClusterError> {
        let mut documents = Vec::new();
        let mut term_counts: Vec<BTreeMap<&str, usize>> = Vec::new();
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();

        for (index, doc) in corpus.non_empty() {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for token in doc.tokens() {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
            for term in counts.keys() {
                *document_frequency.entry(*term).or_insert(0) += 1;
            }
            documents.push(index);
            term_counts.push(counts);
        }

        if documents.is_empty() {
            return Err(ClusterError::NoDocuments);
        }

        let n = documents.len() as f64;
        let columns: BTreeMap<&str, (usize, f64)> = document_frequency
            .iter()
            .enumerate()
            .map(|(column, (term, &df))| {
                let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (*term, (column, idf))
            })
            .collect();

        let mut rows = Array2::<f64>::zeros((documents.len(), columns.len()));
        for (mut row, counts) in rows.rows_mut().into_iter().zip(&term_counts) {
            for (term, &tf) in counts {
                let (column, idf) = columns
                    .get(term)
                    .copied()
                    .ok_or_else(|| ClusterError::Vectorize(format!("term '{term}' has no column")))?;
                row[column] = tf as f64 * idf;
            }
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|weight| weight / norm);
            }
        }

        Ok(Self {
            vocabulary: document_frequency.keys().map(|term| term.to_string()).collect(),
            documents,
            rows,
        })
    }

    /// Column terms in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Review index of each row.
    pub fn documents(&self) -> &[usize] {
        &self.documents
    }

    /// The weight matrix, one row per document.
    pub fn rows(&self) -> &Array2<f64> {
        &self.rows
    }

    /// Number of distinct row vectors.
    ///
    /// Weights are compared after rounding to nine decimal places so that
    /// floating-point noise does not split identical documents.
    pub fn distinct_rows(&self) -> usize {
        self.rows
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|weight| (weight * 1e9).round() as i64)
                    .collect::<Vec<_>>()
            })
            .collect::<HashSet<_>>()
            .len()
    }

    /// The `limit` highest-weighted terms of `weights`, strongest first.
    ///
    /// Only positive weights qualify. Ties keep vocabulary order.
    pub fn top_terms(&self, weights: ArrayView1<'_, f64>, limit: usize) -> Vec<&str> {
        let mut ranked: Vec<(usize, f64)> = weights
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, weight)| *weight > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(limit)
            .filter_map(|(column, _)| self.vocabulary.get(column).map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use ndarray::arr1;
    use verdict_text::NormalizedDocument;

    use super::*;

    fn corpus(docs: &[&[&str]]) -> Corpus {
        Corpus::from_documents(
            docs.iter()
                .map(|tokens| NormalizedDocument::new(tokens.iter().map(|t| t.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn empty_corpus_is_an_error() {
        assert!(matches!(
            TfIdfMatrix::fit(&corpus(&[&[], &[]])),
            Err(ClusterError::NoDocuments)
        ));
    }

    #[test]
    fn vocabulary_is_sorted_and_empty_documents_skipped() {
        let m = TfIdfMatrix::fit(&corpus(&[&["price", "box"], &[], &["logistics"]])).unwrap();
        assert_eq!(m.vocabulary(), &["box", "logistics", "price"]);
        assert_eq!(m.documents(), &[0, 2]);
        assert_eq!(m.rows().dim(), (2, 3));
    }

    #[test]
    fn rows_are_unit_length() {
        let m = TfIdfMatrix::fit(&corpus(&[&["a", "b", "b"], &["b", "c"], &["c"]])).unwrap();
        for row in m.rows().rows() {
            assert!((row.dot(&row) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rarer_terms_weigh_more() {
        // "common" appears in both documents, "rare" in one.
        let m = TfIdfMatrix::fit(&corpus(&[&["common", "rare"], &["common"]])).unwrap();
        let row = m.rows().row(0);
        assert!(row[1] > row[0]);
        assert_eq!(m.top_terms(row, 1), vec!["rare"]);
    }

    #[test]
    fn identical_documents_share_a_vector() {
        let m = TfIdfMatrix::fit(&corpus(&[&["box"], &["box", "box"], &["price"]])).unwrap();
        assert_eq!(m.distinct_rows(), 2);
    }

    #[test]
    fn top_terms_skip_zero_weights_and_break_ties_by_column() {
        let m = TfIdfMatrix::fit(&corpus(&[&["a", "b", "c"]])).unwrap();
        let weights = arr1(&[0.5, 0.0, 0.5]);
        assert_eq!(m.top_terms(weights.view(), 3), vec!["a", "c"]);
    }
}
