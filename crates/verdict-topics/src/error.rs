//! Clustering errors.
//!
//! These never reach callers of the engine. A failing primary strategy is
//! logged and replaced by the frequency fallback.

use thiserror::Error;

/// Why a clustering strategy could not produce a result.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Every document was empty after normalization.
    #[error("no non-empty documents to cluster")]
    NoDocuments,

    /// The document vectors could not be built.
    #[error("vectorization failed: {0}")]
    Vectorize(String),

    /// The partitioning algorithm failed.
    #[error("partitioning failed: {0}")]
    Partition(String),
}
