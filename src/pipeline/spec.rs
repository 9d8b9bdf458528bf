//! Pipeline specification types.
//!
//! A [`PipelineSpec`] is the constructor-time configuration of a
//! [`TextPipeline`](super::runner::TextPipeline). It is immutable once the
//! pipeline is built.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "english",
//!   "extra_stopwords": ["wine", "drink"],
//!   "reduction": "lemmatize",
//!   "contractions": "strip",
//!   "strict": true
//! }
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::{Capability, PipelineError, Result};
use crate::types::{ContractionPolicy, Language, ReductionMode};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

fn default_version() -> u32 {
    SPEC_VERSION
}

fn default_language() -> String {
    Language::default().as_str().to_string()
}

/// Top-level pipeline specification (v1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Spec version (currently `1`).
    #[serde(default = "default_version")]
    pub v: u32,

    /// Language identifier, full name or ISO 639-1 code.
    #[serde(default = "default_language")]
    pub language: String,

    /// Words filtered in addition to the language's base stop-word list.
    #[serde(default)]
    pub extra_stopwords: Option<BTreeSet<String>>,

    /// Word-reduction strategy.
    #[serde(default)]
    pub reduction: ReductionMode,

    /// Apostrophe handling in the cleaner.
    #[serde(default)]
    pub contractions: ContractionPolicy,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: default_language(),
            extra_stopwords: None,
            reduction: ReductionMode::default(),
            contractions: ContractionPolicy::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl PipelineSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PipelineError::InvalidSpec {
            path: "/".to_string(),
            message: e.to_string(),
        })
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_reduction(mut self, reduction: ReductionMode) -> Self {
        self.reduction = reduction;
        self
    }

    pub fn with_contractions(mut self, contractions: ContractionPolicy) -> Self {
        self.contractions = contractions;
        self
    }

    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords = Some(words.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Extra stop words, empty when absent.
    pub fn extra_stopwords(&self) -> impl Iterator<Item = &str> {
        self.extra_stopwords
            .iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Check the configuration and resolve its language.
    ///
    /// Fails on an unknown version, on unknown fields in strict mode, and on
    /// a language that cannot serve the requested reduction mode.
    pub fn validate(&self) -> Result<Language> {
        if self.v != SPEC_VERSION {
            return Err(PipelineError::InvalidSpec {
                path: "/v".to_string(),
                message: format!("unsupported spec version {} (expected {SPEC_VERSION})", self.v),
            });
        }

        if !self.unknown_fields.is_empty() {
            let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
            names.sort_unstable();
            if self.strict {
                return Err(PipelineError::InvalidSpec {
                    path: format!("/{}", names[0]),
                    message: format!("unknown field `{}`", names[0]),
                });
            }
            #[cfg(feature = "tracing")]
            tracing::warn!(fields = ?names, "ignoring unknown pipeline spec fields");
        }

        let language = Language::parse(&self.language).ok_or_else(|| {
            let capability = match self.reduction {
                ReductionMode::Stem => Capability::Stemming,
                ReductionMode::Lemmatize => Capability::Lemmatization,
                ReductionMode::None => Capability::Stopwords,
            };
            PipelineError::unsupported(self.language.clone(), capability)
        })?;

        if self.reduction == ReductionMode::Lemmatize && !language.supports_lemmatization() {
            return Err(PipelineError::unsupported(
                self.language.clone(),
                Capability::PosTagging,
            ));
        }

        Ok(language)
    }
}
