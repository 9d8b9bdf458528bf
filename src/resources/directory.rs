//! Resources read from an NLTK-data style directory.
//!
//! Layout under the root:
//!
//! ```text
//! corpora/stopwords/<language>                   one word per line
//! corpora/wordnet/index.{noun,verb,adj,adv}      base forms
//! corpora/wordnet/{noun,verb,adj,adv}.exc        irregular forms (optional)
//! taggers/averaged_perceptron_tagger_eng/
//!     averaged_perceptron_tagger_eng.weights.json
//!     averaged_perceptron_tagger_eng.tagdict.json
//!     averaged_perceptron_tagger_eng.classes.json
//! ```
//!
//! Stemming rules are compiled in and always available.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{PipelineError, Result};
use crate::nlp::lemmatizer::{LemmaDictionary, WordClass};
use crate::nlp::perceptron::PerceptronTagger;
use crate::nlp::tagger::PosTagger;
use crate::types::Language;

use super::{ResourceId, ResourceKind, ResourceProvider};

const ENGLISH_TAGGER_DIR: &str = "averaged_perceptron_tagger_eng";

/// Provider reading resource files from a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn stopwords_path(&self, language: Language) -> PathBuf {
        self.root
            .join("corpora")
            .join("stopwords")
            .join(language.as_str())
    }

    fn wordnet_dir(&self) -> PathBuf {
        self.root.join("corpora").join("wordnet")
    }

    fn tagger_files(&self) -> [PathBuf; 3] {
        let dir = self.root.join("taggers").join(ENGLISH_TAGGER_DIR);
        ["weights", "tagdict", "classes"]
            .map(|part| dir.join(format!("{ENGLISH_TAGGER_DIR}.{part}.json")))
    }

    /// Files that must exist for `id`. `None` means nothing on disk is needed.
    fn required_files(&self, id: &ResourceId) -> Option<Vec<PathBuf>> {
        match id.kind {
            ResourceKind::Stopwords => Some(vec![self.stopwords_path(id.language)]),
            ResourceKind::StemmingRules => None,
            ResourceKind::LemmaDictionary => {
                let dir = self.wordnet_dir();
                Some(
                    WordClass::ALL
                        .iter()
                        .map(|c| dir.join(format!("index.{}", c.file_suffix())))
                        .collect(),
                )
            }
            ResourceKind::PosTagger => Some(self.tagger_files().to_vec()),
        }
    }
}

fn read(id: ResourceId, path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| PipelineError::missing(id, format!("{}: {e}", path.display())))
}

impl ResourceProvider for DirectoryResources {
    fn has(&self, id: &ResourceId) -> bool {
        let language_ok = match id.kind {
            ResourceKind::LemmaDictionary | ResourceKind::PosTagger => {
                id.language.supports_lemmatization()
            }
            ResourceKind::Stopwords | ResourceKind::StemmingRules => true,
        };
        language_ok
            && self
                .required_files(id)
                .map_or(true, |files| files.iter().all(|f| f.is_file()))
    }

    fn stopwords(&self, language: Language) -> Result<Vec<String>> {
        let id = ResourceId::new(ResourceKind::Stopwords, language);
        let text = read(id, &self.stopwords_path(language))?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    fn lemma_dictionary(&self, language: Language) -> Result<LemmaDictionary> {
        let id = ResourceId::new(ResourceKind::LemmaDictionary, language);
        if !language.supports_lemmatization() {
            return Err(PipelineError::missing(id, "no dictionary layout for this language"));
        }

        let dir = self.wordnet_dir();
        let mut dict = LemmaDictionary::new();
        for class in WordClass::ALL {
            let index = read(id, &dir.join(format!("index.{}", class.file_suffix())))?;
            dict.load_index(class, &index);

            let exc = dir.join(format!("{}.exc", class.file_suffix()));
            if exc.is_file() {
                dict.load_exceptions(class, &read(id, &exc)?);
            }
        }
        Ok(dict)
    }

    fn pos_tagger(&self, language: Language) -> Result<Box<dyn PosTagger>> {
        let id = ResourceId::new(ResourceKind::PosTagger, language);
        if !language.supports_lemmatization() {
            return Err(PipelineError::missing(id, "no tagger model for this language"));
        }

        let [weights, tagdict, classes] = self.tagger_files();
        let tagger = PerceptronTagger::from_json(
            &read(id, &weights)?,
            &read(id, &tagdict)?,
            &read(id, &classes)?,
        )
        .map_err(|e| PipelineError::missing(id, format!("malformed tagger model: {e}")))?;
        Ok(Box::new(tagger))
    }
}
