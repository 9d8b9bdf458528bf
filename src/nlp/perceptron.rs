//! Averaged perceptron POS tagger
//!
//! Decision procedure of the greedy averaged-perceptron tagger, over
//! host-supplied weights in the three-file JSON layout:
//!
//! - `weights`: `{ feature: { tag: weight } }`
//! - `tagdict`: `{ word: tag }` for frequent unambiguous words
//! - `classes`: `[ tag, ... ]`
//!
//! Tags are predicted left to right; each prediction feeds the `i-1 tag`
//! and `i-2 tag` features of the next word.

use std::collections::HashMap;

use rustc_hash::FxHashMap;

use crate::nlp::tagger::PosTagger;
use crate::types::PennTag;

const START: [&str; 2] = ["-START-", "-START2-"];
const END: [&str; 2] = ["-END-", "-END2-"];

/// Averaged perceptron tagger with a tag-dictionary shortcut.
#[derive(Debug, Clone, Default)]
pub struct PerceptronTagger {
    weights: FxHashMap<String, FxHashMap<String, f64>>,
    tagdict: FxHashMap<String, String>,
    classes: Vec<String>,
}

impl PerceptronTagger {
    pub fn new(
        weights: FxHashMap<String, FxHashMap<String, f64>>,
        tagdict: FxHashMap<String, String>,
        mut classes: Vec<String>,
    ) -> Self {
        classes.sort();
        classes.dedup();
        Self {
            weights,
            tagdict,
            classes,
        }
    }

    /// Build from the three JSON documents.
    pub fn from_json(
        weights: &str,
        tagdict: &str,
        classes: &str,
    ) -> Result<Self, serde_json::Error> {
        let weights: HashMap<String, HashMap<String, f64>> = serde_json::from_str(weights)?;
        let tagdict: HashMap<String, String> = serde_json::from_str(tagdict)?;
        let classes: Vec<String> = serde_json::from_str(classes)?;

        let weights = weights
            .into_iter()
            .map(|(feat, per_class)| (feat, per_class.into_iter().collect()))
            .collect();
        Ok(Self::new(weights, tagdict.into_iter().collect(), classes))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Tag tokens, returning the raw tag strings.
    pub fn tag_raw(&self, tokens: &[String]) -> Vec<String> {
        let mut context: Vec<String> = START.iter().map(|s| s.to_string()).collect();
        context.extend(tokens.iter().map(|w| normalize(w)));
        context.extend(END.iter().map(|s| s.to_string()));

        let mut prev = START[0].to_string();
        let mut prev2 = START[1].to_string();
        let mut output = Vec::with_capacity(tokens.len());

        for (i, word) in tokens.iter().enumerate() {
            let tag = match self.tagdict.get(word) {
                Some(tag) => tag.clone(),
                None => {
                    let features = features(i, word, &context, &prev, &prev2);
                    self.predict(&features)
                }
            };
            prev2 = std::mem::replace(&mut prev, tag.clone());
            output.push(tag);
        }
        output
    }

    /// Highest scoring class; ties go to the lexicographically greatest tag.
    fn predict(&self, features: &FxHashMap<String, u32>) -> String {
        let mut scores: FxHashMap<&str, f64> = FxHashMap::default();
        for (feat, &count) in features {
            if count == 0 {
                continue;
            }
            let Some(per_class) = self.weights.get(feat) else {
                continue;
            };
            for (label, weight) in per_class {
                *scores.entry(label.as_str()).or_insert(0.0) += count as f64 * weight;
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for label in &self.classes {
            let score = scores.get(label.as_str()).copied().unwrap_or(0.0);
            // classes are sorted, so `>=` keeps the greatest label on ties
            if best.map_or(true, |(_, s)| score >= s) {
                best = Some((label, score));
            }
        }
        best.map(|(label, _)| label.to_string()).unwrap_or_default()
    }
}

impl PosTagger for PerceptronTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PennTag> {
        self.tag_raw(tokens)
            .iter()
            .map(|t| PennTag::parse(t))
            .collect()
    }

    fn name(&self) -> &str {
        "averaged_perceptron"
    }
}

/// Word normalization used for context features.
fn normalize(word: &str) -> String {
    let first = word.chars().next();
    if word.contains('-') && first != Some('-') {
        "!HYPHEN".to_string()
    } else if word.chars().count() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
        "!YEAR".to_string()
    } else if first.is_some_and(|c| c.is_ascii_digit()) {
        "!DIGITS".to_string()
    } else {
        word.to_lowercase()
    }
}

/// Last `n` characters of `s` (the whole string when shorter).
fn suffix(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let skip = count - n;
    let start = s.char_indices().nth(skip).map_or(0, |(idx, _)| idx);
    &s[start..]
}

fn features(
    i: usize,
    word: &str,
    context: &[String],
    prev: &str,
    prev2: &str,
) -> FxHashMap<String, u32> {
    let i = i + START.len();
    let mut features: FxHashMap<String, u32> = FxHashMap::default();
    let mut add = |parts: &[&str]| {
        *features.entry(parts.join(" ")).or_insert(0) += 1;
    };

    let pref1: String = word.chars().next().map(String::from).unwrap_or_default();

    add(&["bias"]);
    add(&["i suffix", suffix(word, 3)]);
    add(&["i pref1", &pref1]);
    add(&["i-1 tag", prev]);
    add(&["i-2 tag", prev2]);
    add(&["i tag+i-2 tag", prev, prev2]);
    add(&["i word", &context[i]]);
    add(&["i-1 tag+i word", prev, &context[i]]);
    add(&["i-1 word", &context[i - 1]]);
    add(&["i-1 suffix", suffix(&context[i - 1], 3)]);
    add(&["i-2 word", &context[i - 2]]);
    add(&["i+1 word", &context[i + 1]]);
    add(&["i+1 suffix", suffix(&context[i + 1], 3)]);
    add(&["i+2 word", &context[i + 2]]);

    features
}
