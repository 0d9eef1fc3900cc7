//! Topic clustering for product reviews.
//!
//! Reviews flow one way through this crate:
//!
//! 1. Each [`ReviewRecord`] is normalized into canonical tokens ([`Corpus`]).
//! 2. A [`ClusterStrategy`] groups the documents into labelled partitions.
//! 3. Member sentiment is tallied into a [`TopicCluster`] per partition, with
//!    a net score and optional evidence samples.
//! 4. Ranked clusters yield [`ProsCons`] and keyword weights.
//!
//! [`TopicEngine`] drives steps 1 to 3, preferring TF-IDF + k-means
//! ([`VectorStrategy`], behind the `kmeans` feature) and falling back to
//! frequency grouping ([`FrequencyStrategy`]) when the vector strategy is
//! unavailable or fails. Both paths produce the same [`ClusterSet`] shape.

#![warn(missing_docs)]

mod cluster;
mod corpus;
mod engine;
mod error;
mod evidence;
mod keywords;
mod proscons;
mod review;
mod sentiment;
mod strategy;
mod vector;

pub use cluster::{ClusterSet, LABEL_SEPARATOR, StrategyKind, TopicCluster};
pub use corpus::Corpus;
pub use engine::{ClusterParams, TopicEngine};
pub use error::ClusterError;
pub use evidence::{select_samples, truncate_chars};
pub use keywords::{DEFAULT_KEYWORD_LIMIT, KeywordWeight, keyword_weights};
pub use proscons::{ProsCons, ProsConsRules, pros_cons_from_clusters};
pub use review::{ReviewRecord, Sentiment};
pub use sentiment::SentimentCounts;
#[cfg(feature = "kmeans")]
pub use strategy::VectorStrategy;
pub use strategy::{ClusterStrategy, FrequencyStrategy, Partition};
pub use vector::TfIdfMatrix;
