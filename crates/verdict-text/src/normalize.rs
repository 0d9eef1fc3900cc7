//! Review text normalization.
//!
//! A [`Normalizer`] is built once from lexicon settings and then shared by
//! reference. It never changes after construction, so normalizing the same
//! text always yields the same tokens.

use verdict_config::LexiconSettings;

use crate::{Segmenter, Stopwords, SynonymTable};

/// The canonical tokens of one review, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDocument {
    /// Canonical tokens.
    tokens: Vec<String>,
}

impl NormalizedDocument {
    /// Wraps already-normalized tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// The tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether the document contains `token`.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether normalization left nothing behind.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Turns raw review text into canonical topic tokens.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Word segmenter.
    segmenter: Segmenter,
    /// Stopwords to drop.
    stopwords: Stopwords,
    /// Alias folding.
    synonyms: SynonymTable,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_settings(&LexiconSettings::default())
    }
}

impl Normalizer {
    /// Assembles a normalizer from its parts.
    ///
    /// Synonym aliases and canonical tokens are removed from `stopwords`, so a
    /// topic word can never be filtered out before it is folded.
    pub fn new(segmenter: Segmenter, mut stopwords: Stopwords, synonyms: SynonymTable) -> Self {
        let mut unprotected = 0usize;
        for term in synonyms.protected_terms() {
            if stopwords.remove(term) {
                unprotected += 1;
            }
        }
        if unprotected > 0 {
            tracing::debug!(count = unprotected, "synonym terms removed from stopwords");
        }
        Self {
            segmenter,
            stopwords,
            synonyms,
        }
    }

    /// Builds a normalizer from lexicon settings.
    pub fn from_settings(settings: &LexiconSettings) -> Self {
        Self::new(
            Segmenter::detect(settings.segmentation),
            Stopwords::from_settings(settings),
            SynonymTable::from_settings(settings),
        )
    }

    /// The segmenter in use.
    pub fn segmenter(&self) -> Segmenter {
        self.segmenter
    }

    /// The synonym table in use.
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Normalizes text into canonical tokens.
    ///
    /// Words are case-folded and trimmed. Phrase aliases are folded first,
    /// then empty tokens, stopwords, numbers and bare punctuation are dropped
    /// and the remaining words are folded through the synonym table.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let words: Vec<String> = self
            .segmenter
            .segment(text)
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        let mut tokens = Vec::with_capacity(words.len());
        let mut rest = words.as_slice();
        while let Some((word, tail)) = rest.split_first() {
            if let Some((canonical, consumed)) = self.synonyms.match_phrase(rest) {
                tokens.push(canonical.to_string());
                rest = rest.get(consumed..).unwrap_or_default();
                continue;
            }
            if let Some(token) = self.fold_word(word) {
                tokens.push(token);
            }
            rest = tail;
        }
        tokens
    }

    /// Normalizes text into a [`NormalizedDocument`].
    pub fn document(&self, text: &str) -> NormalizedDocument {
        NormalizedDocument::new(self.normalize(text))
    }

    /// Filters and folds a single lowercased word.
    fn fold_word(&self, word: &str) -> Option<String> {
        if self.stopwords.contains(word)
            || word.chars().all(char::is_numeric)
            || !word.chars().any(char::is_alphanumeric)
        {
            return None;
        }
        Some(self.synonyms.canonicalize(word))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn plain(stop: &[&str]) -> Normalizer {
        let mut stopwords = Stopwords::empty();
        stopwords.extend(stop.iter().copied());
        Normalizer::new(Segmenter::Pattern, stopwords, SynonymTable::builtin())
    }

    #[test]
    fn folds_synonyms_and_drops_stopwords() {
        let normalizer = plain(&["the", "was", "and"]);
        assert_eq!(
            normalizer.normalize("The shipping was FAST and the box intact"),
            vec!["logistics", "fast", "packaging", "intact"]
        );
    }

    #[test]
    fn phrases_fold_before_single_words() {
        let normalizer = plain(&[]);
        assert_eq!(
            normalizer.normalize("Customer Service replied"),
            vec!["after-sales", "replied"]
        );
    }

    #[test]
    fn digits_and_punctuation_are_dropped() {
        let normalizer = plain(&[]);
        assert_eq!(
            normalizer.normalize("arrived in 3 days - 100 percent"),
            vec!["arrived", "in", "days", "percent"]
        );
    }

    #[test]
    fn empty_and_whitespace_text_yield_nothing() {
        let normalizer = plain(&[]);
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   \n\t ").is_empty());
        assert!(normalizer.document(" ").is_empty());
    }

    #[test]
    fn synonym_terms_are_never_stopwords() {
        let normalizer = plain(&["value", "price", "box"]);
        assert_eq!(normalizer.normalize("value box"), vec!["price", "packaging"]);
    }

    #[test]
    fn normalization_is_deterministic() {
        let normalizer = Normalizer::default();
        let text = "Great quality, fast delivery, customer service was friendly.";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }

    #[test]
    fn default_normalizer_handles_review_text() {
        let normalizer = Normalizer::default();
        let tokens = normalizer.normalize("The product arrived, but the shipping was slow.");
        assert!(tokens.contains(&"logistics".to_string()));
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"product".to_string()));
    }

    #[cfg(feature = "segmentation")]
    #[test]
    fn chinese_review_folds_to_topics() {
        let normalizer = Normalizer::default();
        let tokens = normalizer.normalize("物流很快，包装完好，客服态度好，性价比高");
        for topic in ["logistics", "packaging", "after-sales", "price"] {
            assert!(tokens.iter().any(|t| t == topic), "{topic} missing from {tokens:?}");
        }
        assert!(!tokens.iter().any(|t| t == "物" || t == "流"));
    }

    #[cfg(feature = "segmentation")]
    #[test]
    fn chinese_fillers_are_dropped() {
        let tokens = Normalizer::default().normalize("物流 很快 非常 满意");
        assert_eq!(tokens.first().map(String::as_str), Some("logistics"));
        assert!(!tokens.iter().any(|t| t == "非常"));
    }

    #[test]
    fn sentiment_adjectives_are_not_topics() {
        let tokens = Normalizer::default().normalize("great quality, fast logistics");
        assert_eq!(tokens, vec!["quality", "logistics"]);
    }

    #[test]
    fn configured_synonyms_apply() {
        let mut settings = LexiconSettings {
            english_stopwords: false,
            ..LexiconSettings::default()
        };
        settings
            .synonyms
            .insert("battery".to_string(), vec!["charge".to_string()]);
        let normalizer = Normalizer::from_settings(&settings);
        assert_eq!(normalizer.normalize("charge lasts"), vec!["battery", "lasts"]);
    }

    #[test]
    fn document_exposes_tokens() {
        let normalizer = plain(&[]);
        let doc = normalizer.document("delivery delivery box");
        assert_eq!(doc.len(), 3);
        assert!(doc.contains("logistics"));
        assert!(!doc.contains("delivery"));
        assert_eq!(doc.tokens()[2], "packaging");
    }
}
