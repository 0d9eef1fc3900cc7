//! Stopword filtering for review tokens.
//!
//! The default set combines:
//! - Standard English stopwords from the `stop-words` crate
//! - Filler words that appear in nearly every product review, including
//!   generic sentiment and intensity adjectives ("great", "fast", "high")
//!   that describe a topic rather than name one
//! - Common CJK particles and fillers
//!
//! Users can extend the set from configuration.

use std::collections::HashSet;

use stop_words::LANGUAGE;
use verdict_config::LexiconSettings;

/// A case-insensitive stopword set.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates the default set: English stopwords plus review fillers.
    pub fn new() -> Self {
        let mut stopwords = Self::empty();
        stopwords.extend(stop_words::get(LANGUAGE::English).iter().copied());
        stopwords.extend(REVIEW_FILLERS.iter().copied());
        stopwords.extend(CJK_FILLERS.iter().copied());
        stopwords
    }

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Builds the set described by lexicon settings.
    ///
    /// Review fillers are always included. The English list is included when
    /// `english_stopwords` is set, and user entries are added on top.
    pub fn from_settings(settings: &LexiconSettings) -> Self {
        let mut stopwords = if settings.english_stopwords {
            Self::new()
        } else {
            let mut fillers = Self::empty();
            fillers.extend(REVIEW_FILLERS.iter().copied());
            fillers.extend(CJK_FILLERS.iter().copied());
            fillers
        };
        stopwords.extend(settings.stopwords.iter().map(String::as_str));
        stopwords
    }

    /// Adds words to the set.
    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            let word = word.trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Removes a word from the set. Returns true if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&word.trim().to_lowercase())
    }

    /// Checks if a term is a stopword.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Words that carry no topic in a product review.
static REVIEW_FILLERS: &[&str] = &[
    "really", "very", "pretty", "quite", "just", "bit", "lot", "lots", "thing", "things", "stuff",
    "product", "products", "item", "items", "bought", "buy", "buying", "purchase", "purchased",
    "order", "ordered", "got", "get", "overall", "definitely", "totally", "honestly", "basically",
    "star", "stars", "review", "reviews", "ok", "okay",
    // Sentiment and intensity adjectives.
    "great", "good", "bad", "nice", "fine", "excellent", "terrible", "awful", "poor", "perfect",
    "awesome", "amazing", "horrible", "decent", "fast", "quick", "quickly", "slow", "slowly",
    "high", "low", "damaged", "love", "loved", "hate", "hated", "like", "liked", "happy",
    "unhappy", "satisfied", "disappointed", "disappointing", "best", "worst", "better", "worse",
];

/// High-frequency CJK particles and fillers.
pub static CJK_FILLERS: &[&str] = &[
    "的", "了", "和", "与", "为", "在", "是", "就", "也", "都", "很", "还", "有", "不", "我", "这",
    "那", "个", "吧", "啊", "呢", "吗", "哦", "非常", "真的", "一个", "没有", "我们", "你们",
    "他们", "这个", "那个", "就是", "还是", "但是", "而且", "以及", "如果", "因为", "所以", "也许",
    "可能", "比较", "感觉", "觉得", "有点", "有些", "东西", "宝贝", "商品", "产品",
];
