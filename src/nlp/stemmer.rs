//! Snowball stemming via `rust-stemmers`.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

use crate::types::Language;

/// Snowball algorithm for a supported language.
pub fn algorithm_for(language: Language) -> Algorithm {
    match language {
        Language::Danish => Algorithm::Danish,
        Language::Dutch => Algorithm::Dutch,
        Language::English => Algorithm::English,
        Language::Finnish => Algorithm::Finnish,
        Language::French => Algorithm::French,
        Language::German => Algorithm::German,
        Language::Italian => Algorithm::Italian,
        Language::Norwegian => Algorithm::Norwegian,
        Language::Portuguese => Algorithm::Portuguese,
        Language::Spanish => Algorithm::Spanish,
        Language::Swedish => Algorithm::Swedish,
        Language::Turkish => Algorithm::Turkish,
    }
}

/// Language-specific Snowball stemmer.
///
/// The compiled rules carry no per-call state, so one instance can stem any
/// number of tokens.
pub struct SnowballStemmer {
    language: Language,
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            inner: Stemmer::create(algorithm_for(language)),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Stem a single token.
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    /// Stem repeatedly until the result stops changing.
    ///
    /// A single Snowball pass is not idempotent (`agreed` -> `agre` -> `agr`).
    /// Stems never grow, so the word length bounds the number of passes.
    pub fn stem_until_stable(&self, word: &str) -> String {
        let mut current = self.stem(word);
        for _ in 0..word.len() {
            let next = self.stem(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Clone for SnowballStemmer {
    fn clone(&self) -> Self {
        Self::new(self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stems() {
        let stemmer = SnowballStemmer::new(Language::English);
        assert_eq!(stemmer.stem("aromas"), "aroma");
        assert_eq!(stemmer.stem("cherry"), "cherri");
        assert_eq!(stemmer.stem("spicy"), "spici");
        assert_eq!(stemmer.stem("bodied"), "bodi");
    }

    #[test]
    fn test_stems_are_stable_under_restemming() {
        let stemmer = SnowballStemmer::new(Language::English);
        for word in ["aromas", "cherry", "spicy", "bodied", "full", "flavors"] {
            let once = stemmer.stem(word);
            assert_eq!(stemmer.stem(&once), once, "{word}");
        }
    }

    #[test]
    fn test_single_pass_is_not_always_stable() {
        let stemmer = SnowballStemmer::new(Language::English);
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("agre"), "agr");
    }

    #[test]
    fn test_stem_until_stable_reaches_fixed_point() {
        let stemmer = SnowballStemmer::new(Language::English);
        assert_eq!(stemmer.stem_until_stable("agreed"), "agr");
        assert_eq!(stemmer.stem_until_stable("cheese"), "chee");
        assert_eq!(stemmer.stem_until_stable("cherry"), "cherri");
        for word in ["agreed", "cheese", "oaked", "fruitiness", "generously"] {
            let stable = stemmer.stem_until_stable(word);
            assert_eq!(stemmer.stem(&stable), stable, "{word}");
        }
        assert_eq!(stemmer.stem_until_stable(""), "");
    }

    #[test]
    fn test_german_stemmer() {
        let stemmer = SnowballStemmer::new(Language::German);
        assert_eq!(stemmer.language(), Language::German);
        assert!(!stemmer.stem("weine").is_empty());
    }

    #[test]
    fn test_clone_keeps_language() {
        let stemmer = SnowballStemmer::new(Language::French);
        assert_eq!(stemmer.clone().language(), Language::French);
    }
}
