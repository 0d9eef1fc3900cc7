//! Text preparation for review topic analysis.
//!
//! Raw review text goes through three stages before any clustering happens:
//!
//! - **Segmentation** splits text into candidate words ([`Segmenter`]).
//! - **Filtering** drops stopwords, bare numbers and punctuation ([`Stopwords`]).
//! - **Canonicalization** folds aliases onto a shared topic token ([`SynonymTable`]).
//!
//! [`Normalizer`] bundles the three and turns a review into a
//! [`NormalizedDocument`].

#![warn(missing_docs)]

mod normalize;
mod segment;
mod stopwords;
mod synonyms;

pub use normalize::{NormalizedDocument, Normalizer};
pub use segment::Segmenter;
pub use stopwords::Stopwords;
pub use synonyms::SynonymTable;
