//! Natural Language Processing components
//!
//! Leaf stages of the normalization pipeline: cleaning, word tokenization,
//! stemming, POS tagging, lemmatization and stopword filtering.

pub mod cleaner;
pub mod lemmatizer;
pub mod perceptron;
pub mod stemmer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
