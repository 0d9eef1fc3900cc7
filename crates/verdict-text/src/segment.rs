//! Word segmentation.
//!
//! Han text has no spaces between words, and UAX #29 word boundaries fall
//! between every Han character. Unicode segmentation therefore hands runs of
//! Han characters to a dictionary segmenter (jieba) and uses word boundaries
//! for everything else.

#[cfg(feature = "segmentation")]
use std::sync::LazyLock;

#[cfg(feature = "segmentation")]
use jieba_rs::Jieba;
#[cfg(feature = "segmentation")]
use unicode_segmentation::UnicodeSegmentation;
use verdict_config::SegmentationMode;

#[cfg(feature = "segmentation")]
use crate::{stopwords::CJK_FILLERS, synonyms::BUILTIN};

/// Dictionary segmenter for Han runs, with the built-in topic aliases and
/// fillers registered so each is cut as one word.
#[cfg(feature = "segmentation")]
static JIEBA: LazyLock<Jieba> = LazyLock::new(|| {
    let mut jieba = Jieba::new();
    let aliases = BUILTIN.iter().flat_map(|(_, aliases)| aliases.iter());
    for word in aliases.chain(CJK_FILLERS.iter()) {
        if word.chars().count() > 1 && word.chars().all(is_han) {
            jieba.add_word(word, None, None);
        }
    }
    jieba
});

/// Splits text into candidate words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmenter {
    /// Unicode word boundaries (UAX #29), with dictionary segmentation of
    /// Han text.
    Unicode,
    /// Runs of alphanumeric characters, `_` and `-`. A Han run stays one word.
    Pattern,
}

impl Segmenter {
    /// Picks the best available segmenter for the requested mode.
    ///
    /// Unicode segmentation is an optional capability. When it was compiled
    /// out, requests for it degrade to [`Segmenter::Pattern`].
    pub fn detect(mode: SegmentationMode) -> Self {
        match mode {
            SegmentationMode::Unicode if Self::unicode_available() => Self::Unicode,
            SegmentationMode::Unicode => {
                tracing::debug!("unicode segmentation unavailable, using pattern segmenter");
                Self::Pattern
            }
            SegmentationMode::Pattern => Self::Pattern,
        }
    }

    /// Whether Unicode word segmentation was compiled in.
    pub const fn unicode_available() -> bool {
        cfg!(feature = "segmentation")
    }

    /// Splits `text` into words, in order of appearance.
    pub fn segment(self, text: &str) -> Vec<&str> {
        match self {
            Self::Unicode => unicode_words(text),
            Self::Pattern => pattern_words(text),
        }
    }
}

/// Splits on Unicode word boundaries, cutting Han runs with jieba.
#[cfg(feature = "segmentation")]
fn unicode_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for (han, run) in script_runs(text) {
        if han {
            words.extend(JIEBA.cut(run, true).into_iter().filter(|w| !w.trim().is_empty()));
        } else {
            words.extend(run.unicode_words());
        }
    }
    words
}

/// Whether `c` is a CJK unified ideograph.
#[cfg(feature = "segmentation")]
fn is_han(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2A6DF}'
    )
}

/// Splits text into maximal runs that are either all Han or all non-Han.
#[cfg(feature = "segmentation")]
fn script_runs(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut run_is_han = false;
    for (index, c) in text.char_indices() {
        let han = is_han(c);
        if index > start && han != run_is_han {
            runs.push((run_is_han, &text[start..index]));
            start = index;
        }
        if index == start {
            run_is_han = han;
        }
    }
    if start < text.len() {
        runs.push((run_is_han, &text[start..]));
    }
    runs
}

/// Without the segmentation feature, Unicode requests use the pattern split.
#[cfg(not(feature = "segmentation"))]
fn unicode_words(text: &str) -> Vec<&str> {
    pattern_words(text)
}

/// Whether `c` can appear inside a pattern word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Splits into maximal runs of word characters.
fn pattern_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .collect()
}
