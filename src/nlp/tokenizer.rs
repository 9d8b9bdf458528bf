//! Word tokenization
//!
//! Splits cleaned text into word tokens. Input is expected to come from the
//! cleaner, so the only residual punctuation is an in-word apostrophe (when
//! contractions are kept). Where one survives, it is split according to the
//! language's conventions:
//!
//! - English splits enclitics Treebank-style: `don't` -> `do` `n't`,
//!   `winery's` -> `winery` `'s`.
//! - French and Italian split elided articles: `l'eau` -> `l'` `eau`.
//! - Other languages keep the word whole.

use crate::types::Language;

/// English enclitics, longest first so `n't` wins over `'t`.
const ENGLISH_CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Language-aware word tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTokenizer {
    language: Language,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl WordTokenizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Tokenize `text` into owned word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            if !word.contains('\'') {
                tokens.push(word.to_string());
                continue;
            }
            match self.language {
                Language::English => split_english(word, &mut tokens),
                Language::French | Language::Italian => split_elision(word, &mut tokens),
                _ => tokens.push(word.to_string()),
            }
        }
        tokens
    }
}

fn split_english(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();
    for clitic in ENGLISH_CLITICS {
        if lower.ends_with(clitic) && word.len() > clitic.len() {
            let cut = word.len() - clitic.len();
            out.push(word[..cut].to_string());
            out.push(word[cut..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}

fn split_elision(word: &str, out: &mut Vec<String>) {
    // Only the first apostrophe marks an elision: "qu'il" -> "qu'" "il".
    if let Some(pos) = word.find('\'') {
        let (head, tail) = word.split_at(pos + 1);
        if !tail.is_empty() {
            out.push(head.to_string());
            out.push(tail.to_string());
            return;
        }
    }
    out.push(word.to_string());
}
