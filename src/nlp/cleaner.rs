//! Number and punctuation stripping
//!
//! Turns raw free text into a lowercase run of ASCII words separated by
//! single spaces. Every character that is not an ASCII letter becomes a word
//! boundary; apostrophes are handled by the [`ContractionPolicy`].

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::ContractionPolicy;

/// An apostrophe after a word character, with the word characters after it.
static CLITIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)(?:['\x{2019}]\w+)+").expect("valid clitic pattern"));

/// A run of ASCII letters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("valid word pattern"));

/// A run of ASCII letters joined by inner apostrophes.
static CONTRACTED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+(?:['\x{2019}][A-Za-z]+)*").expect("valid contracted word pattern")
});

/// Stateless text cleaner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cleaner {
    policy: ContractionPolicy,
}

impl Cleaner {
    pub fn new(policy: ContractionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ContractionPolicy {
        self.policy
    }

    /// Clean a single record.
    pub fn clean(&self, text: &str) -> String {
        clean_with(text, self.policy)
    }

    /// Clean any displayable value by first converting it to a string.
    pub fn clean_display<T: Display + ?Sized>(&self, value: &T) -> String {
        self.clean(&value.to_string())
    }
}

/// Clean `text` with the default [`ContractionPolicy::Strip`] policy.
pub fn clean(text: &str) -> String {
    clean_with(text, ContractionPolicy::Strip)
}

/// Clean `text` under the given contraction policy.
///
/// - ASCII letters are kept and lowercased.
/// - `Strip`: an apostrophe that follows a word character is dropped together
///   with the word characters after it (`don't` becomes `don`).
/// - `Keep`: an apostrophe with an ASCII letter on both sides is kept, as `'`.
/// - Everything else separates words. Output has no leading, trailing or
///   repeated spaces.
///
/// A quote mark with no word character before it is only a boundary, so
/// `'quoted'` cleans to `quoted`. This intentionally differs from the
/// `('(?:\w+))|[^a-zA-Z]` pattern historically used for this data, which
/// drops `'quoted` whole.
pub fn clean_with(text: &str, policy: ContractionPolicy) -> String {
    let words: Vec<String> = match policy {
        ContractionPolicy::Strip => {
            let stripped = CLITIC.replace_all(text, "${1}");
            WORD.find_iter(&stripped)
                .map(|m| m.as_str().to_ascii_lowercase())
                .collect()
        }
        ContractionPolicy::Keep => CONTRACTED_WORD
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase().replace('\u{2019}', "'"))
            .collect(),
    };
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_case() {
        assert_eq!(
            clean("Full-bodied and spicy cherry aromas!"),
            "full bodied and spicy cherry aromas"
        );
    }

    #[test]
    fn test_strips_digits_and_symbols() {
        assert_eq!(clean("THE wine IS 100% delicious"), "the wine is delicious");
        assert_eq!(clean("2015 Napa, $45"), "napa");
    }

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(clean("  savory\r\n\n herbal\t\tstyle  "), "savory herbal style");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t "), "");
        assert_eq!(clean("123 !!! 456"), "");
    }

    #[test]
    fn test_strip_policy_drops_clitics() {
        assert_eq!(clean("don't"), "don");
        assert_eq!(clean("The winery's best"), "the winery best");
        assert_eq!(clean("rock'n'roll"), "rock");
        assert_eq!(clean("it\u{2019}s"), "it");
    }

    #[test]
    fn test_strip_policy_lone_apostrophe_is_boundary() {
        assert_eq!(clean("vines' age"), "vines age");
        assert_eq!(clean("'quoted'"), "quoted");
    }

    #[test]
    fn test_keep_policy_preserves_inner_apostrophe() {
        let cleaner = Cleaner::new(ContractionPolicy::Keep);
        assert_eq!(cleaner.clean("Don't"), "don't");
        assert_eq!(cleaner.clean("winery's 'best'"), "winery's best");
        assert_eq!(cleaner.clean("vines' age"), "vines age");
        assert_eq!(cleaner.clean("l\u{2019}eau"), "l'eau");
    }

    #[test]
    fn test_non_ascii_letters_are_boundaries() {
        assert_eq!(clean("rosé côtes"), "ros c tes");
    }

    #[test]
    fn test_idempotent_both_policies() {
        let samples = [
            "Full-bodied, 14.5% ABV; don't miss it!",
            "l'eau d'Italie -- rock'n'roll",
            "  ",
        ];
        for policy in [ContractionPolicy::Strip, ContractionPolicy::Keep] {
            for s in samples {
                let once = clean_with(s, policy);
                assert_eq!(clean_with(&once, policy), once);
            }
        }
    }

    #[test]
    fn test_clean_display_coerces() {
        let cleaner = Cleaner::default();
        assert_eq!(cleaner.clean_display(&12.5), "");
        assert_eq!(cleaner.clean_display("Merlot"), "merlot");
    }
}
