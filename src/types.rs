//! Core shared types
//!
//! Languages, reduction modes and the part-of-speech tag set used across the
//! normalization stages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Language
// ============================================================================

/// A language the pipeline can normalize.
///
/// Only languages that have a Snowball stemmer, a word tokenizer convention
/// and a base stop-word list are representable here. Anything else is
/// rejected when a pipeline is built.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Danish,
    Dutch,
    #[default]
    English,
    Finnish,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    /// All supported languages, in name order.
    pub const ALL: [Language; 12] = [
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Spanish,
        Language::Swedish,
        Language::Turkish,
    ];

    /// Parse a language identifier (full English name or ISO 639-1 code).
    ///
    /// Returns `None` for anything unsupported.
    pub fn parse(value: &str) -> Option<Self> {
        let lang = match value.trim().to_lowercase().as_str() {
            "da" | "danish" => Language::Danish,
            "nl" | "dutch" => Language::Dutch,
            "en" | "english" => Language::English,
            "fi" | "finnish" => Language::Finnish,
            "fr" | "french" => Language::French,
            "de" | "german" => Language::German,
            "it" | "italian" => Language::Italian,
            "no" | "nb" | "norwegian" => Language::Norwegian,
            "pt" | "portuguese" => Language::Portuguese,
            "es" | "spanish" => Language::Spanish,
            "sv" | "swedish" => Language::Swedish,
            "tr" | "turkish" => Language::Turkish,
            _ => return None,
        };
        Some(lang)
    }

    /// Canonical lowercase name, as used in resource paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
            Language::Turkish => "turkish",
        }
    }

    /// Whether POS tagging and dictionary lemmatization are available.
    pub fn supports_lemmatization(&self) -> bool {
        matches!(self, Language::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Reduction mode / contraction policy
// ============================================================================

/// Which word-reduction strategy the normalizer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionMode {
    /// Snowball stemming, token by token.
    #[default]
    Stem,
    /// POS-aware dictionary lemmatization.
    Lemmatize,
    /// Leave cleaned text untouched.
    None,
}

impl ReductionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReductionMode::Stem => "stem",
            ReductionMode::Lemmatize => "lemmatize",
            ReductionMode::None => "none",
        }
    }
}

impl FromStr for ReductionMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "stem" | "stemming" => Ok(ReductionMode::Stem),
            "lemmatize" | "lemma" | "lemmatization" => Ok(ReductionMode::Lemmatize),
            "none" | "off" => Ok(ReductionMode::None),
            other => Err(format!("unknown reduction mode `{other}`")),
        }
    }
}

/// How the cleaner treats apostrophes inside words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractionPolicy {
    /// Drop an apostrophe together with the word characters that follow it
    /// (`don't` -> `don`, `winery's` -> `winery`).
    #[default]
    Strip,
    /// Keep an apostrophe that sits between two ASCII letters (`don't`).
    Keep,
}

impl FromStr for ContractionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "strip" => Ok(ContractionPolicy::Strip),
            "keep" => Ok(ContractionPolicy::Keep),
            other => Err(format!("unknown contraction policy `{other}`")),
        }
    }
}

// ============================================================================
// POS tags
// ============================================================================

/// Penn Treebank part-of-speech tags, as emitted by the taggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PennTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun (`PRP$`)
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun (`WP$`)
    WPS,
    /// Wh-adverb
    WRB,
    /// `$`
    Dollar,
    /// `#`
    Pound,
    /// Opening quotation mark (` `` `)
    OpenQuote,
    /// Closing quotation mark (`''`)
    CloseQuote,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// Sentence-final punctuation
    Period,
    /// `:` or `;`
    Colon,
    /// `--`
    Dash,
    /// Any tag string outside the Penn set
    Other,
}

impl PennTag {
    /// Parse a tag string. Unrecognized tags become [`PennTag::Other`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "CC" => PennTag::CC,
            "CD" => PennTag::CD,
            "DT" => PennTag::DT,
            "EX" => PennTag::EX,
            "FW" => PennTag::FW,
            "IN" => PennTag::IN,
            "JJ" => PennTag::JJ,
            "JJR" => PennTag::JJR,
            "JJS" => PennTag::JJS,
            "LS" => PennTag::LS,
            "MD" => PennTag::MD,
            "NN" => PennTag::NN,
            "NNS" => PennTag::NNS,
            "NNP" => PennTag::NNP,
            "NNPS" => PennTag::NNPS,
            "PDT" => PennTag::PDT,
            "POS" => PennTag::POS,
            "PRP" => PennTag::PRP,
            "PRP$" => PennTag::PRPS,
            "RB" => PennTag::RB,
            "RBR" => PennTag::RBR,
            "RBS" => PennTag::RBS,
            "RP" => PennTag::RP,
            "SYM" => PennTag::SYM,
            "TO" => PennTag::TO,
            "UH" => PennTag::UH,
            "VB" => PennTag::VB,
            "VBD" => PennTag::VBD,
            "VBG" => PennTag::VBG,
            "VBN" => PennTag::VBN,
            "VBP" => PennTag::VBP,
            "VBZ" => PennTag::VBZ,
            "WDT" => PennTag::WDT,
            "WP" => PennTag::WP,
            "WP$" => PennTag::WPS,
            "WRB" => PennTag::WRB,
            "$" => PennTag::Dollar,
            "#" => PennTag::Pound,
            "``" => PennTag::OpenQuote,
            "''" => PennTag::CloseQuote,
            "(" => PennTag::LeftParen,
            ")" => PennTag::RightParen,
            "," => PennTag::Comma,
            "." => PennTag::Period,
            ":" => PennTag::Colon,
            "--" => PennTag::Dash,
            _ => PennTag::Other,
        }
    }

    /// The Treebank spelling of the tag (`Other` renders as `"?"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PennTag::CC => "CC",
            PennTag::CD => "CD",
            PennTag::DT => "DT",
            PennTag::EX => "EX",
            PennTag::FW => "FW",
            PennTag::IN => "IN",
            PennTag::JJ => "JJ",
            PennTag::JJR => "JJR",
            PennTag::JJS => "JJS",
            PennTag::LS => "LS",
            PennTag::MD => "MD",
            PennTag::NN => "NN",
            PennTag::NNS => "NNS",
            PennTag::NNP => "NNP",
            PennTag::NNPS => "NNPS",
            PennTag::PDT => "PDT",
            PennTag::POS => "POS",
            PennTag::PRP => "PRP",
            PennTag::PRPS => "PRP$",
            PennTag::RB => "RB",
            PennTag::RBR => "RBR",
            PennTag::RBS => "RBS",
            PennTag::RP => "RP",
            PennTag::SYM => "SYM",
            PennTag::TO => "TO",
            PennTag::UH => "UH",
            PennTag::VB => "VB",
            PennTag::VBD => "VBD",
            PennTag::VBG => "VBG",
            PennTag::VBN => "VBN",
            PennTag::VBP => "VBP",
            PennTag::VBZ => "VBZ",
            PennTag::WDT => "WDT",
            PennTag::WP => "WP",
            PennTag::WPS => "WP$",
            PennTag::WRB => "WRB",
            PennTag::Dollar => "$",
            PennTag::Pound => "#",
            PennTag::OpenQuote => "``",
            PennTag::CloseQuote => "''",
            PennTag::LeftParen => "(",
            PennTag::RightParen => ")",
            PennTag::Comma => ",",
            PennTag::Period => ".",
            PennTag::Colon => ":",
            PennTag::Dash => "--",
            PennTag::Other => "?",
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, PennTag::NN | PennTag::NNS | PennTag::NNP | PennTag::NNPS)
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PennTag::VB | PennTag::VBD | PennTag::VBG | PennTag::VBN | PennTag::VBP | PennTag::VBZ
        )
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, PennTag::JJ | PennTag::JJR | PennTag::JJS)
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dictionary category a tagged word is lemmatized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionCategory {
    Adjective,
    AdjectiveSatellite,
    Verb,
    Noun,
    Adverb,
    /// No dictionary category; the token is kept verbatim.
    Unknown,
}

impl ReductionCategory {
    /// Map a Treebank tag to its reduction category.
    ///
    /// Total over [`PennTag`]: every variant is listed, so adding a tag
    /// without deciding its category fails to compile.
    pub fn from_tag(tag: PennTag) -> Self {
        use PennTag::*;
        match tag {
            JJ | JJR | JJS => ReductionCategory::Adjective,
            VB | VBD | VBG | VBN | VBP | VBZ => ReductionCategory::Verb,
            NN | NNS | NNP | NNPS => ReductionCategory::Noun,
            RB | RBR | RBS | RP => ReductionCategory::Adverb,
            CC | CD | DT | EX | FW | IN | LS | MD | PDT | POS | PRP | PRPS | SYM | TO | UH
            | WDT | WP | WPS | WRB => ReductionCategory::Unknown,
            Dollar | Pound | OpenQuote | CloseQuote | LeftParen | RightParen | Comma | Period
            | Colon | Dash => ReductionCategory::Unknown,
            Other => ReductionCategory::Unknown,
        }
    }

    /// WordNet's single-letter POS code (`n`, `v`, `a`, `s`, `r`).
    pub fn wordnet_code(&self) -> Option<char> {
        match self {
            ReductionCategory::Noun => Some('n'),
            ReductionCategory::Verb => Some('v'),
            ReductionCategory::Adjective => Some('a'),
            ReductionCategory::AdjectiveSatellite => Some('s'),
            ReductionCategory::Adverb => Some('r'),
            ReductionCategory::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_names_and_codes() {
        assert_eq!(Language::parse("english"), Some(Language::English));
        assert_eq!(Language::parse("EN"), Some(Language::English));
        assert_eq!(Language::parse(" german "), Some(Language::German));
        assert_eq!(Language::parse("klingon"), None);
        assert_eq!(Language::parse("hungarian"), None);
    }

    #[test]
    fn test_language_roundtrip_as_str() {
        for lang in Language::ALL {
            assert_eq!(Language::parse(lang.as_str()), Some(lang));
        }
    }

    #[test]
    fn test_reduction_mode_from_str() {
        assert_eq!("stem".parse::<ReductionMode>(), Ok(ReductionMode::Stem));
        assert_eq!("Lemmatize".parse::<ReductionMode>(), Ok(ReductionMode::Lemmatize));
        assert_eq!("none".parse::<ReductionMode>(), Ok(ReductionMode::None));
        assert!("fuzzy".parse::<ReductionMode>().is_err());
    }

    #[test]
    fn test_penn_tag_parse_roundtrip() {
        for tag in ["NN", "PRP$", "WP$", "VBZ", "``", "--", ","] {
            assert_eq!(PennTag::parse(tag).as_str(), tag);
        }
        assert_eq!(PennTag::parse("XYZ"), PennTag::Other);
    }

    #[test]
    fn test_reduction_category_mapping() {
        assert_eq!(ReductionCategory::from_tag(PennTag::JJS), ReductionCategory::Adjective);
        assert_eq!(ReductionCategory::from_tag(PennTag::VBZ), ReductionCategory::Verb);
        assert_eq!(ReductionCategory::from_tag(PennTag::NNP), ReductionCategory::Noun);
        assert_eq!(ReductionCategory::from_tag(PennTag::RP), ReductionCategory::Adverb);
        assert_eq!(ReductionCategory::from_tag(PennTag::DT), ReductionCategory::Unknown);
        assert_eq!(ReductionCategory::from_tag(PennTag::Other), ReductionCategory::Unknown);
    }
}
