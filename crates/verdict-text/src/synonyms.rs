//! Synonym folding onto canonical topic tokens.
//!
//! Aliases are either single words ("shipping") or multi-word phrases
//! ("customer service"). Phrases are matched over adjacent words before any
//! single-word lookup, longest phrase first.

use std::collections::{BTreeSet, HashMap};

use verdict_config::LexiconSettings;

/// Built-in topic table: canonical token and its English and Chinese aliases.
pub static BUILTIN: &[(&str, &[&str])] = &[
    (
        "after-sales",
        &[
            "customer service",
            "customer support",
            "after sales",
            "aftersales",
            "warranty",
            "refund",
            "refunds",
            "售后",
            "客服",
            "客服态度",
            "质保",
            "退款",
        ],
    ),
    (
        "logistics",
        &[
            "shipping",
            "shipped",
            "delivery",
            "delivered",
            "courier",
            "shipment",
            "dispatch",
            "物流",
            "运输",
            "配送",
            "发货",
            "快递",
        ],
    ),
    (
        "price",
        &[
            "value",
            "expensive",
            "cheap",
            "cost",
            "costs",
            "pricey",
            "overpriced",
            "affordable",
            "价格",
            "便宜",
            "贵",
            "性价比",
        ],
    ),
    ("packaging", &["package", "packing", "box", "wrapping", "包装", "包装盒"]),
    (
        "quality",
        &["workmanship", "build", "material", "materials", "durability", "质量", "做工", "材质", "稳定性"],
    ),
    ("appearance", &["look", "looks", "design", "exterior", "颜值", "外观"]),
    ("service", &["staff", "seller", "服务", "卖家"]),
];

/// Maps aliases to canonical topic tokens.
///
/// All keys are stored lowercased. A canonical token that is not itself an
/// alias passes through normalization unchanged.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    /// Single-word alias to canonical token.
    words: HashMap<String, String>,
    /// Phrase alias (two or more words) to canonical token.
    phrases: HashMap<Vec<String>, String>,
    /// Length in words of the longest phrase alias.
    longest_phrase: usize,
}

impl SynonymTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in English topic table.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (canonical, aliases) in BUILTIN {
            for alias in *aliases {
                table.insert(canonical, alias);
            }
        }
        table
    }

    /// Builds the built-in table extended by configured synonyms.
    ///
    /// Configured aliases override built-in ones.
    pub fn from_settings(settings: &LexiconSettings) -> Self {
        let mut table = Self::builtin();
        for (canonical, aliases) in &settings.synonyms {
            for alias in aliases {
                table.insert(canonical, alias);
            }
        }
        table
    }

    /// Registers `alias` as a synonym of `canonical`.
    ///
    /// Aliases containing whitespace are registered as phrases. Empty
    /// aliases and empty canonical tokens are ignored.
    pub fn insert(&mut self, canonical: &str, alias: &str) {
        let canonical = canonical.trim().to_lowercase();
        if canonical.is_empty() {
            return;
        }
        let words: Vec<String> = alias.split_whitespace().map(str::to_lowercase).collect();
        match words.len() {
            0 => {}
            1 => {
                self.words.extend(words.into_iter().map(|w| (w, canonical.clone())));
            }
            n => {
                self.longest_phrase = self.longest_phrase.max(n);
                self.phrases.insert(words, canonical);
            }
        }
    }

    /// Looks up a single lowercased word.
    pub fn canonical(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Canonicalizes a term, folding case and trimming.
    ///
    /// Unknown terms are returned folded but otherwise unchanged.
    pub fn canonicalize(&self, term: &str) -> String {
        let folded = term.trim().to_lowercase();
        match self.canonical(&folded) {
            Some(canonical) => canonical.to_string(),
            None => folded,
        }
    }

    /// Finds the longest phrase alias starting at the beginning of `words`.
    ///
    /// Returns the canonical token and the number of words consumed.
    pub fn match_phrase(&self, words: &[String]) -> Option<(&str, usize)> {
        let longest = self.longest_phrase.min(words.len());
        (2..=longest).rev().find_map(|len| {
            self.phrases
                .get(&words[..len])
                .map(|canonical| (canonical.as_str(), len))
        })
    }

    /// Every single-word alias and every canonical token in the table.
    ///
    /// These must never be filtered as stopwords.
    pub fn protected_terms(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .flat_map(|(alias, canonical)| [alias.as_str(), canonical.as_str()])
            .chain(self.phrases.values().map(String::as_str))
    }

    /// Returns the distinct canonical tokens, sorted.
    pub fn canonicals(&self) -> Vec<&str> {
        let distinct: BTreeSet<&str> = self
            .words
            .values()
            .chain(self.phrases.values())
            .map(String::as_str)
            .collect();
        distinct.into_iter().collect()
    }
}
