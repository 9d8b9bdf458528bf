//! Language resource provisioning
//!
//! The pipeline never fetches reference data on its own. A configuration
//! declares the resources it needs ([`required_resources`]), the host picks a
//! [`ResourceProvider`] that can supply them, and the pipeline checks all of
//! them before building any stage.
//!
//! ## Providers
//!
//! - [`BundledResources`]: everything compiled into the crate.
//! - [`DirectoryResources`]: an NLTK-data style directory on disk.

mod bundled;
mod directory;

pub use bundled::BundledResources;
pub use directory::DirectoryResources;

use std::fmt;

use crate::errors::Result;
use crate::nlp::lemmatizer::LemmaDictionary;
use crate::nlp::tagger::PosTagger;
use crate::types::{Language, ReductionMode};

/// Kind of reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Base stop-word list.
    Stopwords,
    /// Snowball stemming rules.
    StemmingRules,
    /// Lemma dictionary (base forms + exception lists).
    LemmaDictionary,
    /// Part-of-speech tagger model.
    PosTagger,
}

impl ResourceKind {
    fn prefix(&self) -> &'static str {
        match self {
            ResourceKind::Stopwords => "stopwords",
            ResourceKind::StemmingRules => "snowball",
            ResourceKind::LemmaDictionary => "wordnet",
            ResourceKind::PosTagger => "tagger",
        }
    }

    /// Data format revision the loaders understand.
    pub fn version(&self) -> &'static str {
        match self {
            ResourceKind::Stopwords => "1",
            ResourceKind::StemmingRules => "snowball-2",
            ResourceKind::LemmaDictionary => "wordnet-3.0",
            ResourceKind::PosTagger => "penn-treebank-1",
        }
    }
}

/// A named, versioned piece of language reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    pub kind: ResourceKind,
    pub language: Language,
}

impl ResourceId {
    pub fn new(kind: ResourceKind, language: Language) -> Self {
        Self { kind, language }
    }

    /// Stable name, e.g. `stopwords/english`.
    pub fn name(&self) -> String {
        format!("{}/{}", self.kind.prefix(), self.language.as_str())
    }

    pub fn version(&self) -> &'static str {
        self.kind.version()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name(), self.version())
    }
}

/// Resources a pipeline for `language` in `mode` needs before first use.
pub fn required_resources(language: Language, mode: ReductionMode) -> Vec<ResourceId> {
    let mut ids = vec![ResourceId::new(ResourceKind::Stopwords, language)];
    match mode {
        ReductionMode::Stem => {
            ids.push(ResourceId::new(ResourceKind::StemmingRules, language));
        }
        ReductionMode::Lemmatize => {
            ids.push(ResourceId::new(ResourceKind::PosTagger, language));
            ids.push(ResourceId::new(ResourceKind::LemmaDictionary, language));
        }
        ReductionMode::None => {}
    }
    ids
}

/// Supplies language reference data to a pipeline under construction.
///
/// Loaders return [`PipelineError::MissingLanguageResource`] when data is
/// absent or unreadable.
///
/// [`PipelineError::MissingLanguageResource`]: crate::errors::PipelineError::MissingLanguageResource
pub trait ResourceProvider {
    /// Whether the resource can be supplied, without loading it.
    fn has(&self, id: &ResourceId) -> bool;

    /// Base stop-word list.
    fn stopwords(&self, language: Language) -> Result<Vec<String>>;

    /// Lemma dictionary for POS-constrained lemmatization.
    fn lemma_dictionary(&self, language: Language) -> Result<LemmaDictionary>;

    /// Part-of-speech tagger.
    fn pos_tagger(&self, language: Language) -> Result<Box<dyn PosTagger>>;
}

/// Check that every declared resource is available.
///
/// Reports the first missing resource, in declaration order.
pub fn ensure_available(provider: &dyn ResourceProvider, required: &[ResourceId]) -> Result<()> {
    match required.iter().find(|id| !provider.has(id)) {
        Some(id) => Err(crate::errors::PipelineError::missing(
            *id,
            "not provided by the configured resource provider",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names() {
        let id = ResourceId::new(ResourceKind::Stopwords, Language::English);
        assert_eq!(id.name(), "stopwords/english");
        assert_eq!(id.to_string(), "stopwords/english@1");
    }

    #[test]
    fn test_required_resources_per_mode() {
        let stem = required_resources(Language::English, ReductionMode::Stem);
        assert_eq!(
            stem.iter().map(|r| r.kind).collect::<Vec<_>>(),
            vec![ResourceKind::Stopwords, ResourceKind::StemmingRules]
        );

        let lemma = required_resources(Language::English, ReductionMode::Lemmatize);
        assert!(lemma.iter().any(|r| r.kind == ResourceKind::LemmaDictionary));
        assert!(lemma.iter().any(|r| r.kind == ResourceKind::PosTagger));
        assert!(!lemma.iter().any(|r| r.kind == ResourceKind::StemmingRules));

        let none = required_resources(Language::German, ReductionMode::None);
        assert_eq!(none.len(), 1);
        assert_eq!(none[0].language, Language::German);
    }

    #[test]
    fn test_ensure_available_bundled() {
        let provider = BundledResources::new();
        let ids = required_resources(Language::English, ReductionMode::Lemmatize);
        assert!(ensure_available(&provider, &ids).is_ok());
    }
}
