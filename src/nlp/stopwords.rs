//! Stopword filtering
//!
//! Base lists are the NLTK lists shipped with the `stop-words` crate (or come
//! from a host-supplied resource directory), unioned with caller-supplied extras. The set is
//! frozen once built.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::Language;

/// A frozen filter for removing stopwords from text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Build the filter from the bundled base list for `language` plus extras.
    pub fn new<I, S>(language: Language, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words(bundled_stopwords(language), extra)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the filter from an explicit base list plus extras.
    ///
    /// Every word is lowercased so that membership can be checked by exact
    /// equality against cleaned tokens.
    pub fn from_words<B, I, S, T>(base: B, extra: I) -> Self
    where
        B: IntoIterator<Item = T>,
        T: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = base
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .chain(extra.into_iter().map(|w| w.as_ref().trim().to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { stopwords }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self::from_words(words.iter().copied(), std::iter::empty::<&str>())
    }

    /// Check if a word is a stopword (exact match on its lowercase form)
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Drop stopword tokens from whitespace-separated `text`, preserving order.
    pub fn filter(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// NLTK base stopword list shipped with the `stop-words` crate.
pub fn bundled_stopwords(language: Language) -> Vec<String> {
    let lang = match language {
        Language::Danish => LANGUAGE::Danish,
        Language::Dutch => LANGUAGE::Dutch,
        Language::English => LANGUAGE::English,
        Language::Finnish => LANGUAGE::Finnish,
        Language::French => LANGUAGE::French,
        Language::German => LANGUAGE::German,
        Language::Italian => LANGUAGE::Italian,
        Language::Norwegian => LANGUAGE::Norwegian,
        Language::Portuguese => LANGUAGE::Portuguese,
        Language::Spanish => LANGUAGE::Spanish,
        Language::Swedish => LANGUAGE::Swedish,
        Language::Turkish => LANGUAGE::Turkish,
    };

    get(lang).iter().map(|s| s.to_string()).collect()
}

/// Free-function form of [`StopwordFilter::filter`].
pub fn filter(text: &str, stopwords: &StopwordFilter) -> String {
    stopwords.filter(text)
}
