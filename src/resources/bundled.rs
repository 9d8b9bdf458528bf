//! Resources compiled into the crate.
//!
//! Stop-word lists come from the `stop-words` crate and stemming rules from
//! `rust-stemmers`. English lemmatization uses the small wine-domain
//! dictionary and tagger lexicon under `data/english/`.

use crate::errors::{PipelineError, Result};
use crate::nlp::lemmatizer::{LemmaDictionary, WordClass};
use crate::nlp::stopwords::bundled_stopwords;
use crate::nlp::tagger::{PosTagger, RuleTagger, TagLexicon};
use crate::types::Language;

use super::{ResourceId, ResourceKind, ResourceProvider};

const ENGLISH_INDEX: [(WordClass, &str); 4] = [
    (WordClass::Noun, include_str!("../../data/english/index.noun")),
    (WordClass::Verb, include_str!("../../data/english/index.verb")),
    (WordClass::Adjective, include_str!("../../data/english/index.adj")),
    (WordClass::Adverb, include_str!("../../data/english/index.adv")),
];

const ENGLISH_EXCEPTIONS: [(WordClass, &str); 4] = [
    (WordClass::Noun, include_str!("../../data/english/noun.exc")),
    (WordClass::Verb, include_str!("../../data/english/verb.exc")),
    (WordClass::Adjective, include_str!("../../data/english/adj.exc")),
    (WordClass::Adverb, include_str!("../../data/english/adv.exc")),
];

const ENGLISH_TAGGER_LEXICON: &str = include_str!("../../data/english/tagger.lex");

/// Provider backed entirely by compiled-in data.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledResources;

impl BundledResources {
    pub fn new() -> Self {
        Self
    }

    /// The bundled English lemma dictionary.
    pub fn english_dictionary() -> LemmaDictionary {
        let mut dict = LemmaDictionary::new();
        for (class, source) in ENGLISH_INDEX {
            dict.load_index(class, source);
        }
        for (class, source) in ENGLISH_EXCEPTIONS {
            dict.load_exceptions(class, source);
        }
        dict
    }

    /// The bundled English rule tagger.
    pub fn english_tagger() -> RuleTagger {
        RuleTagger::new(TagLexicon::parse(ENGLISH_TAGGER_LEXICON))
    }
}

impl ResourceProvider for BundledResources {
    fn has(&self, id: &ResourceId) -> bool {
        match id.kind {
            ResourceKind::Stopwords | ResourceKind::StemmingRules => true,
            ResourceKind::LemmaDictionary | ResourceKind::PosTagger => {
                id.language.supports_lemmatization()
            }
        }
    }

    fn stopwords(&self, language: Language) -> Result<Vec<String>> {
        Ok(bundled_stopwords(language))
    }

    fn lemma_dictionary(&self, language: Language) -> Result<LemmaDictionary> {
        match language {
            Language::English => Ok(Self::english_dictionary()),
            other => Err(PipelineError::missing(
                ResourceId::new(ResourceKind::LemmaDictionary, other),
                "no bundled lemma dictionary for this language",
            )),
        }
    }

    fn pos_tagger(&self, language: Language) -> Result<Box<dyn PosTagger>> {
        match language {
            Language::English => Ok(Box::new(Self::english_tagger())),
            other => Err(PipelineError::missing(
                ResourceId::new(ResourceKind::PosTagger, other),
                "no bundled tagger for this language",
            )),
        }
    }
}
