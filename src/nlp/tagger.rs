//! Part-of-speech tagging
//!
//! [`PosTagger`] is the seam between the lemmatizing normalizer and whatever
//! tagger the host provides. Two implementations ship with the crate:
//!
//! - [`RuleTagger`]: lexicon lookup, suffix guessing for unknown words, then
//!   a pass of contextual transformation rules (Brill style).
//! - [`PerceptronTagger`](super::perceptron::PerceptronTagger): averaged
//!   perceptron over host-supplied weights.
//!
//! Both are context-sensitive: the tag of a word depends on its neighbours.

use rustc_hash::FxHashMap;

use crate::types::PennTag;

/// Assigns a Penn Treebank tag to every token of a sentence.
pub trait PosTagger: Send + Sync {
    /// Tag `tokens`. The result has exactly one tag per token.
    fn tag(&self, tokens: &[String]) -> Vec<PennTag>;

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}

// ============================================================================
// Lexicon
// ============================================================================

/// Word -> candidate tags, most likely first.
#[derive(Debug, Clone, Default)]
pub struct TagLexicon {
    entries: FxHashMap<String, Vec<PennTag>>,
}

impl TagLexicon {
    /// Parse a lexicon of `word TAG [TAG ...]` lines. `#` starts a comment.
    ///
    /// Lines without any recognizable tag are skipped.
    pub fn parse(source: &str) -> Self {
        let mut entries = FxHashMap::default();
        for line in source.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let tags: Vec<PennTag> = fields
                .map(PennTag::parse)
                .filter(|t| *t != PennTag::Other)
                .collect();
            if !tags.is_empty() {
                entries.insert(word.to_lowercase(), tags);
            }
        }
        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<&[PennTag]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Contextual rules
// ============================================================================

/// Condition under which a transformation rule fires.
#[derive(Debug, Clone, Copy)]
enum Context {
    PrevTagIn(&'static [PennTag]),
    PrevWordIn(&'static [&'static str]),
    PrevTagAndNextTagIn(&'static [PennTag], &'static [PennTag]),
}

/// Brill-style rule: retag `from` as `to` when the context matches and the
/// word may carry `to` (or is unknown to the lexicon).
#[derive(Debug, Clone, Copy)]
struct ContextRule {
    from: &'static [PennTag],
    to: PennTag,
    when: Context,
}

const NOMINAL_LEFT: &[PennTag] = &[
    PennTag::DT,
    PennTag::JJ,
    PennTag::JJR,
    PennTag::JJS,
    PennTag::PRPS,
    PennTag::POS,
    PennTag::CD,
];

const BE_HAVE: &[&str] = &[
    "be", "is", "are", "am", "was", "were", "been", "being", "has", "have", "had", "having",
];

const CONTEXT_RULES: &[ContextRule] = &[
    // "to finish", "to age"
    ContextRule {
        from: &[PennTag::NN, PennTag::VBP],
        to: PennTag::VB,
        when: Context::PrevTagIn(&[PennTag::TO, PennTag::MD]),
    },
    // "the finish", "a long finish"
    ContextRule {
        from: &[PennTag::VB, PennTag::VBP],
        to: PennTag::NN,
        when: Context::PrevTagIn(NOMINAL_LEFT),
    },
    // "the notes", "spicy flavors"
    ContextRule {
        from: &[PennTag::VBZ],
        to: PennTag::NNS,
        when: Context::PrevTagIn(NOMINAL_LEFT),
    },
    // "the palate notes spicy cherry"
    ContextRule {
        from: &[PennTag::NNS],
        to: PennTag::VBZ,
        when: Context::PrevTagAndNextTagIn(
            &[PennTag::NN, PennTag::NNP, PennTag::PRP],
            &[PennTag::DT, PennTag::JJ, PennTag::PRPS, PennTag::RB],
        ),
    },
    // "is enhanced", "has aged"
    ContextRule {
        from: &[PennTag::VBD],
        to: PennTag::VBN,
        when: Context::PrevWordIn(BE_HAVE),
    },
];

// ============================================================================
// RuleTagger
// ============================================================================

/// Lexicon + suffix heuristics + contextual rules.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: TagLexicon,
}

impl RuleTagger {
    pub fn new(lexicon: TagLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &TagLexicon {
        &self.lexicon
    }

    fn initial_tag(&self, word: &str) -> PennTag {
        match self.lexicon.get(word) {
            Some(tags) => tags[0],
            None => guess_unknown(word),
        }
    }

    fn may_carry(&self, word: &str, tag: PennTag) -> bool {
        match self.lexicon.get(word) {
            Some(tags) => tags.contains(&tag),
            None => true,
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PennTag> {
        let words: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut tags: Vec<PennTag> = words.iter().map(|w| self.initial_tag(w)).collect();

        for i in 0..tags.len() {
            let prev_tag = i.checked_sub(1).map(|j| tags[j]);
            let prev_word = i.checked_sub(1).map(|j| words[j].as_str());
            let next_tag = tags.get(i + 1).copied();

            for rule in CONTEXT_RULES {
                if !rule.from.contains(&tags[i]) || !self.may_carry(&words[i], rule.to) {
                    continue;
                }
                let fires = match rule.when {
                    Context::PrevTagIn(set) => prev_tag.is_some_and(|t| set.contains(&t)),
                    Context::PrevWordIn(set) => prev_word.is_some_and(|w| set.contains(&w)),
                    Context::PrevTagAndNextTagIn(left, right) => {
                        prev_tag.is_some_and(|t| left.contains(&t))
                            && next_tag.is_some_and(|t| right.contains(&t))
                    }
                };
                if fires {
                    tags[i] = rule.to;
                    break;
                }
            }
        }

        tags
    }

    fn name(&self) -> &str {
        "rule"
    }
}

/// Tag a word the lexicon does not know from its shape.
fn guess_unknown(word: &str) -> PennTag {
    let len = word.chars().count();
    if word.contains('\'') {
        return match word {
            "n't" => PennTag::RB,
            "'s" => PennTag::POS,
            "'ll" | "'d" => PennTag::MD,
            "'re" | "'ve" | "'m" => PennTag::VBP,
            _ => PennTag::NN,
        };
    }
    if len > 4 && word.ends_with("ing") {
        return PennTag::VBG;
    }
    if len > 3 && word.ends_with("ed") {
        return PennTag::VBD;
    }
    if len > 3 && word.ends_with("ly") {
        return PennTag::RB;
    }
    if len > 4 && word.ends_with("est") {
        return PennTag::JJS;
    }
    const NOUN_SUFFIXES: &[&str] = &["ness", "ment", "tion", "sion", "ity", "ism", "ship"];
    if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PennTag::NN;
    }
    const ADJ_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "less", "ish", "ic", "al", "ary",
    ];
    if len > 4 && ADJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PennTag::JJ;
    }
    if len > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return PennTag::NNS;
    }
    PennTag::NN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> TagLexicon {
        TagLexicon::parse(
            "# test lexicon\n\
             the DT\n\
             a DT\n\
             to TO\n\
             is VBZ\n\
             and CC\n\
             wine NN\n\
             palate NN\n\
             finish NN VB\n\
             notes NNS VBZ\n\
             shows VBZ NNS\n\
             spicy JJ\n\
             cherry NN\n\
             long JJ RB\n\
             enhanced VBD VBN JJ\n",
        )
    }

    fn tag(words: &str) -> Vec<PennTag> {
        let tokens: Vec<String> = words.split_whitespace().map(String::from).collect();
        RuleTagger::new(lexicon()).tag(&tokens)
    }

    #[test]
    fn test_lexicon_parse_skips_comments_and_bad_lines() {
        let lex = TagLexicon::parse("# c\nwine NN\nbogus XX\n\n");
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.get("wine"), Some(&[PennTag::NN][..]));
        assert!(lex.get("bogus").is_none());
    }

    #[test]
    fn test_one_tag_per_token() {
        assert_eq!(tag("the wine is long").len(), 4);
        assert!(tag("").is_empty());
    }

    #[test]
    fn test_lexicon_first_tag() {
        assert_eq!(
            tag("the wine shows spicy notes"),
            vec![PennTag::DT, PennTag::NN, PennTag::VBZ, PennTag::JJ, PennTag::NNS]
        );
    }

    #[test]
    fn test_to_makes_verb() {
        assert_eq!(tag("to finish"), vec![PennTag::TO, PennTag::VB]);
        assert_eq!(tag("the finish"), vec![PennTag::DT, PennTag::NN]);
    }

    #[test]
    fn test_plural_becomes_verb_between_subject_and_object() {
        assert_eq!(
            tag("the palate notes spicy cherry"),
            vec![PennTag::DT, PennTag::NN, PennTag::VBZ, PennTag::JJ, PennTag::NN]
        );
    }

    #[test]
    fn test_past_participle_after_be() {
        assert_eq!(tag("is enhanced")[1], PennTag::VBN);
        assert_eq!(tag("wine enhanced")[1], PennTag::VBD);
    }

    #[test]
    fn test_unknown_word_guessing() {
        assert_eq!(guess_unknown("ripening"), PennTag::VBG);
        assert_eq!(guess_unknown("softly"), PennTag::RB);
        assert_eq!(guess_unknown("tannins"), PennTag::NNS);
        assert_eq!(guess_unknown("glass"), PennTag::NN);
        assert_eq!(guess_unknown("luscious"), PennTag::JJ);
        assert_eq!(guess_unknown("n't"), PennTag::RB);
        assert_eq!(guess_unknown("xyz"), PennTag::NN);
    }
}
