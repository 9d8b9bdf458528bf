//! Stage trait definitions for the pipeline.
//!
//! The cleaning and filtering stages have one implementation each. The
//! middle stage, word reduction, is a strategy: [`Normalizer`] is the seam,
//! and [`Reduction`] is the closed set of built-in strategies the pipeline
//! dispatches over.

use std::fmt;

use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stemmer::SnowballStemmer;
use crate::nlp::tagger::PosTagger;
use crate::nlp::tokenizer::WordTokenizer;
use crate::types::{Language, PennTag, ReductionCategory, ReductionMode};

// ============================================================================
// Normalizer: word reduction (stage 2)
// ============================================================================

/// Reduces every word of a cleaned string to a canonical form.
///
/// # Contract
///
/// - **Input**: output of the cleaner (lowercase ASCII letters and single
///   spaces).
/// - **Output**: the reduced words joined by single spaces, in input order.
///   `""` maps to `""`.
pub trait Normalizer {
    fn normalize(&self, cleaned: &str) -> String;

    /// Mode this strategy implements.
    fn mode(&self) -> ReductionMode;

    /// Whether a word's reduction depends on the words around it.
    ///
    /// The pipeline re-runs contextual strategies on their own filtered
    /// output until it stops changing.
    fn is_contextual(&self) -> bool {
        false
    }
}

/// Identity normalizer for [`ReductionMode::None`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNormalizer;

impl Normalizer for NoopNormalizer {
    #[inline]
    fn normalize(&self, cleaned: &str) -> String {
        cleaned.to_string()
    }

    fn mode(&self) -> ReductionMode {
        ReductionMode::None
    }
}

// ─── Stemming ───────────────────────────────────────────────────────────────

/// Tokenize, then replace each token with its Snowball stem, re-stemmed until
/// it no longer changes.
#[derive(Debug, Clone)]
pub struct StemNormalizer {
    tokenizer: WordTokenizer,
    stemmer: SnowballStemmer,
}

impl StemNormalizer {
    pub fn new(language: Language) -> Self {
        Self {
            tokenizer: WordTokenizer::new(language),
            stemmer: SnowballStemmer::new(language),
        }
    }
}

impl Normalizer for StemNormalizer {
    fn normalize(&self, cleaned: &str) -> String {
        self.tokenizer
            .tokenize(cleaned)
            .iter()
            .map(|token| self.stemmer.stem_until_stable(token))
            // the English stemmer reduces a bare `'s` clitic to nothing
            .filter(|stem| !stem.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn mode(&self) -> ReductionMode {
        ReductionMode::Stem
    }
}

// ─── Lemmatization ──────────────────────────────────────────────────────────

/// Tokenize, POS-tag the whole token sequence, then lemmatize each token
/// under the category its tag maps to.
pub struct LemmaNormalizer {
    tokenizer: WordTokenizer,
    tagger: Box<dyn PosTagger>,
    lemmatizer: Lemmatizer,
}

impl LemmaNormalizer {
    pub fn new(tokenizer: WordTokenizer, tagger: Box<dyn PosTagger>, lemmatizer: Lemmatizer) -> Self {
        Self {
            tokenizer,
            tagger,
            lemmatizer,
        }
    }

    pub fn tagger_name(&self) -> &str {
        self.tagger.name()
    }
}

impl fmt::Debug for LemmaNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LemmaNormalizer")
            .field("tokenizer", &self.tokenizer)
            .field("tagger", &self.tagger.name())
            .field("dictionary_size", &self.lemmatizer.dictionary().len())
            .finish()
    }
}

impl Normalizer for LemmaNormalizer {
    fn normalize(&self, cleaned: &str) -> String {
        let tokens = self.tokenizer.tokenize(cleaned);
        let tags = self.tagger.tag(&tokens);
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                // A short tag vector leaves the remaining tokens untouched.
                let tag = tags.get(i).copied().unwrap_or(PennTag::Other);
                self.lemmatizer
                    .lemmatize(token, ReductionCategory::from_tag(tag))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn mode(&self) -> ReductionMode {
        ReductionMode::Lemmatize
    }

    fn is_contextual(&self) -> bool {
        true
    }
}

// ============================================================================
// Reduction: built-in strategy dispatch
// ============================================================================

/// The built-in reduction strategies.
#[derive(Debug)]
pub enum Reduction {
    Stem(StemNormalizer),
    Lemmatize(LemmaNormalizer),
    None(NoopNormalizer),
}

impl Normalizer for Reduction {
    fn normalize(&self, cleaned: &str) -> String {
        match self {
            Reduction::Stem(n) => n.normalize(cleaned),
            Reduction::Lemmatize(n) => n.normalize(cleaned),
            Reduction::None(n) => n.normalize(cleaned),
        }
    }

    fn mode(&self) -> ReductionMode {
        match self {
            Reduction::Stem(n) => n.mode(),
            Reduction::Lemmatize(n) => n.mode(),
            Reduction::None(n) => n.mode(),
        }
    }

    fn is_contextual(&self) -> bool {
        match self {
            Reduction::Stem(n) => n.is_contextual(),
            Reduction::Lemmatize(n) => n.is_contextual(),
            Reduction::None(n) => n.is_contextual(),
        }
    }
}
