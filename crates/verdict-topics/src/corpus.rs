//! Normalized review corpus.

use verdict_text::{NormalizedDocument, Normalizer};

use crate::ReviewRecord;

/// Normalized documents aligned index-for-index with the reviews they came
/// from.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// One document per review.
    documents: Vec<NormalizedDocument>,
}

impl Corpus {
    /// Normalizes every review.
    pub fn build(normalizer: &Normalizer, reviews: &[ReviewRecord]) -> Self {
        Self {
            documents: reviews
                .iter()
                .map(|review| normalizer.document(&review.content))
                .collect(),
        }
    }

    /// Wraps pre-normalized documents.
    pub fn from_documents(documents: Vec<NormalizedDocument>) -> Self {
        Self { documents }
    }

    /// All documents, including empty ones.
    pub fn documents(&self) -> &[NormalizedDocument] {
        &self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents with at least one token, with their review indices.
    pub fn non_empty(&self) -> impl Iterator<Item = (usize, &NormalizedDocument)> {
        self.documents
            .iter()
            .enumerate()
            .filter(|(_, doc)| !doc.is_empty())
    }

    /// Indices of the documents containing `token`, ascending.
    pub fn containing(&self, token: &str) -> Vec<usize> {
        self.documents
            .iter()
            .enumerate()
            .filter(|(_, doc)| doc.contains(token))
            .map(|(index, _)| index)
            .collect()
    }
}
