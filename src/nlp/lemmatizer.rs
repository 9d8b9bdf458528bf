//! Dictionary lemmatization
//!
//! WordNet-style morphological reduction: a word is mapped to a base form
//! that exists in the dictionary for its grammatical category, using the
//! category's exception list first and regular suffix substitutions second.
//! Words with no valid base form are returned unchanged.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::ReductionCategory;

/// Suffix substitutions per category, in application order.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Dictionary category backing a [`ReductionCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    pub const ALL: [WordClass; 4] = [
        WordClass::Noun,
        WordClass::Verb,
        WordClass::Adjective,
        WordClass::Adverb,
    ];

    /// Satellites share the adjective dictionary.
    pub fn from_category(category: ReductionCategory) -> Option<Self> {
        match category {
            ReductionCategory::Noun => Some(WordClass::Noun),
            ReductionCategory::Verb => Some(WordClass::Verb),
            ReductionCategory::Adjective | ReductionCategory::AdjectiveSatellite => {
                Some(WordClass::Adjective)
            }
            ReductionCategory::Adverb => Some(WordClass::Adverb),
            ReductionCategory::Unknown => None,
        }
    }

    /// File suffix used by WordNet dictionary files (`index.noun`, `noun.exc`).
    pub fn file_suffix(&self) -> &'static str {
        match self {
            WordClass::Noun => "noun",
            WordClass::Verb => "verb",
            WordClass::Adjective => "adj",
            WordClass::Adverb => "adv",
        }
    }

    fn rules(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            WordClass::Noun => NOUN_RULES,
            WordClass::Verb => VERB_RULES,
            WordClass::Adjective => ADJ_RULES,
            WordClass::Adverb => &[],
        }
    }

    fn index(&self) -> usize {
        match self {
            WordClass::Noun => 0,
            WordClass::Verb => 1,
            WordClass::Adjective => 2,
            WordClass::Adverb => 3,
        }
    }
}

/// Base forms and irregular inflections for one word class.
#[derive(Debug, Clone, Default)]
struct ClassTable {
    lemmas: FxHashSet<String>,
    exceptions: FxHashMap<String, Vec<String>>,
}

/// Lemma dictionary covering the four open word classes.
#[derive(Debug, Clone, Default)]
pub struct LemmaDictionary {
    tables: [ClassTable; 4],
}

impl LemmaDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load base forms from WordNet `index.*` text.
    ///
    /// The first field of every line is a lemma (multi-word lemmas use `_`).
    /// License header lines start with a space and are skipped.
    pub fn load_index(&mut self, class: WordClass, source: &str) {
        let table = &mut self.tables[class.index()];
        for line in source.lines() {
            if line.starts_with(' ') || line.starts_with('#') {
                continue;
            }
            if let Some(lemma) = line.split_whitespace().next() {
                table.lemmas.insert(lemma.to_lowercase());
            }
        }
    }

    /// Load irregular forms from WordNet `*.exc` text (`inflected base [base ...]`).
    pub fn load_exceptions(&mut self, class: WordClass, source: &str) {
        let table = &mut self.tables[class.index()];
        for line in source.lines() {
            if line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(inflected), Some(first)) = (fields.next(), fields.next()) else {
                continue;
            };
            let bases = std::iter::once(first)
                .chain(fields)
                .map(str::to_lowercase)
                .collect();
            table.exceptions.insert(inflected.to_lowercase(), bases);
        }
    }

    pub fn insert_lemma(&mut self, class: WordClass, lemma: &str) {
        self.tables[class.index()].lemmas.insert(lemma.to_lowercase());
    }

    pub fn contains(&self, class: WordClass, lemma: &str) -> bool {
        self.tables[class.index()].lemmas.contains(lemma)
    }

    /// Number of base forms across all classes.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|t| t.lemmas.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|t| t.lemmas.is_empty())
    }

    /// All base forms of `word` in `class`, in discovery order.
    ///
    /// Exceptions short-circuit the rules. Otherwise the word itself and its
    /// one-step substitutions are checked, then substitutions are re-applied
    /// to the previous generation until something matches or nothing is left.
    pub fn base_forms(&self, word: &str, class: WordClass) -> Vec<String> {
        let table = &self.tables[class.index()];
        let rules = class.rules();

        let keep_valid = |forms: &[String]| -> Vec<String> {
            let mut seen = FxHashSet::default();
            forms
                .iter()
                .filter(|f| table.lemmas.contains(f.as_str()) && seen.insert(f.as_str()))
                .cloned()
                .collect()
        };

        if let Some(bases) = table.exceptions.get(word) {
            let mut forms = vec![word.to_string()];
            forms.extend(bases.iter().cloned());
            return keep_valid(&forms);
        }

        let mut forms = apply_rules(std::slice::from_ref(&word.to_string()), rules);
        let mut first = vec![word.to_string()];
        first.extend(forms.iter().cloned());
        let found = keep_valid(&first);
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = apply_rules(&forms, rules);
            let found = keep_valid(&forms);
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            rules.iter().filter_map(move |(old, new)| {
                form.strip_suffix(old).map(|stem| format!("{stem}{new}"))
            })
        })
        .collect()
}

/// Category-constrained lemmatizer over a [`LemmaDictionary`].
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    dictionary: LemmaDictionary,
}

impl Lemmatizer {
    pub fn new(dictionary: LemmaDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &LemmaDictionary {
        &self.dictionary
    }

    /// Reduce `word` to its shortest base form in `category`.
    ///
    /// `Unknown` categories and out-of-vocabulary words come back unchanged.
    pub fn lemmatize(&self, word: &str, category: ReductionCategory) -> String {
        let Some(class) = WordClass::from_category(category) else {
            return word.to_string();
        };
        self.dictionary
            .base_forms(word, class)
            .into_iter()
            .reduce(|best, form| if form.len() < best.len() { form } else { best })
            .unwrap_or_else(|| word.to_string())
    }
}
