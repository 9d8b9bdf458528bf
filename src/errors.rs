//! Construction-time errors.
//!
//! Every error here is raised while a pipeline is being built. Once a
//! [`TextPipeline`](crate::pipeline::runner::TextPipeline) exists, `transform`
//! cannot fail.

use std::fmt;

use thiserror::Error;

use crate::resources::ResourceId;

/// A language capability a pipeline may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Stopwords,
    Stemming,
    PosTagging,
    Lemmatization,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Stopwords => "stopwords",
            Capability::Stemming => "stemming",
            Capability::PosTagging => "pos_tagging",
            Capability::Lemmatization => "lemmatization",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while configuring or constructing a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The language has no support for a capability the configuration needs.
    #[error("unsupported language `{language}`: no {capability} support")]
    UnsupportedLanguage {
        language: String,
        capability: Capability,
    },

    /// Required reference data could not be loaded from the resource provider.
    #[error("missing language resource `{resource}`: {reason}")]
    MissingLanguageResource { resource: ResourceId, reason: String },

    /// The pipeline spec is malformed or carries rejected fields.
    #[error("invalid pipeline spec at `{path}`: {message}")]
    InvalidSpec { path: String, message: String },
}

impl PipelineError {
    pub(crate) fn unsupported(language: impl Into<String>, capability: Capability) -> Self {
        PipelineError::UnsupportedLanguage {
            language: language.into(),
            capability,
        }
    }

    pub(crate) fn missing(resource: ResourceId, reason: impl Into<String>) -> Self {
        PipelineError::MissingLanguageResource {
            resource,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceKind;
    use crate::types::Language;

    #[test]
    fn test_unsupported_language_message() {
        let err = PipelineError::unsupported("klingon", Capability::Stemming);
        assert_eq!(
            err.to_string(),
            "unsupported language `klingon`: no stemming support"
        );
    }

    #[test]
    fn test_missing_resource_message_names_resource() {
        let id = ResourceId::new(ResourceKind::LemmaDictionary, Language::English);
        let err = PipelineError::missing(id, "file not found");
        let msg = err.to_string();
        assert!(msg.contains("wordnet/english"));
        assert!(msg.contains("file not found"));
    }
}
