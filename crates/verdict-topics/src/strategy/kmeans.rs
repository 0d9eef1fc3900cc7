//! TF-IDF + k-means topic clustering.

use linfa::{
    DatasetBase,
    dataset::AsTargets,
    traits::{Fit, Predict},
};
use linfa_clustering::KMeans;
use rand_xoshiro::{Xoshiro256Plus, rand_core::SeedableRng};
use verdict_config::ClusterSettings;
use verdict_text::SynonymTable;

use super::{ClusterStrategy, Partition};
use crate::{ClusterError, Corpus, LABEL_SEPARATOR, StrategyKind, TfIdfMatrix};

/// Partitions TF-IDF document vectors with k-means.
///
/// The number of clusters is clamped to the number of non-empty documents
/// and to the number of distinct document vectors, so no centroid starts
/// without a point of its own. Documents that normalize to nothing take part
/// in no cluster. Each cluster is labelled by its highest-weighted centroid
/// terms. Clusters k-means leaves empty are dropped.
#[derive(Debug, Clone)]
pub struct VectorStrategy {
    /// Independent k-means runs; the lowest-inertia run wins.
    restarts: usize,
    /// Iteration cap per run.
    max_iterations: u64,
    /// Convergence tolerance.
    tolerance: f64,
    /// Fixed seed for reproducible runs.
    seed: Option<u64>,
    /// Folds label terms onto canonical topics.
    synonyms: SynonymTable,
}

impl VectorStrategy {
    /// Creates the strategy from clustering settings.
    pub fn new(settings: &ClusterSettings, synonyms: SynonymTable) -> Self {
        Self {
            restarts: settings.restarts.max(1),
            max_iterations: settings.max_iterations,
            tolerance: settings.tolerance,
            seed: settings.seed,
            synonyms,
        }
    }

    /// Builds a label from centroid terms, folding synonyms and dropping
    /// repeats.
    fn label(&self, terms: &[&str]) -> String {
        let mut folded: Vec<String> = Vec::with_capacity(terms.len());
        for term in terms {
            let canonical = self.synonyms.canonicalize(term);
            if !folded.contains(&canonical) {
                folded.push(canonical);
            }
        }
        folded.join(LABEL_SEPARATOR)
    }
}

impl ClusterStrategy for VectorStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Vector
    }

    fn partition(
        &self,
        corpus: &Corpus,
        max_clusters: usize,
        top_terms: usize,
    ) -> Result<Vec<Partition>, ClusterError> {
        let matrix = TfIdfMatrix::fit(corpus)?;
        let k = max_clusters
            .min(matrix.documents().len())
            .min(matrix.distinct_rows())
            .max(1);

        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::debug!(
            documents = matrix.documents().len(),
            terms = matrix.vocabulary().len(),
            k,
            seed,
            "running k-means"
        );

        let dataset = DatasetBase::from(matrix.rows().clone());
        let model = KMeans::params_with_rng(k, Xoshiro256Plus::seed_from_u64(seed))
            .n_runs(self.restarts)
            .max_n_iterations(self.max_iterations)
            .tolerance(self.tolerance)
            .fit(&dataset)
            .map_err(|e| ClusterError::Partition(e.to_string()))?;

        let predictions = model.predict(&dataset);
        let assignments: Vec<usize> = predictions.as_targets().iter().copied().collect();
        let centroids = model.centroids();

        let mut partitions = Vec::with_capacity(k);
        for (cluster, centroid) in centroids.rows().into_iter().enumerate() {
            let members: Vec<usize> = matrix
                .documents()
                .iter()
                .zip(&assignments)
                .filter(|(_, assigned)| **assigned == cluster)
                .map(|(&review, _)| review)
                .collect();
            if members.is_empty() {
                continue;
            }
            let terms = matrix.top_terms(centroid, top_terms);
            partitions.push(Partition::new(self.label(&terms), members));
        }
        Ok(partitions)
    }
}
