use proptest::prelude::*;

use vintext::nlp::cleaner::{clean, clean_with};
use vintext::nlp::stopwords::StopwordFilter;
use vintext::{ContractionPolicy, PipelineError, PipelineSpec, ReductionMode, TextPipeline};

const EXAMPLE: &str = "Full-bodied and spicy cherry aromas!";

fn pipeline(mode: ReductionMode) -> TextPipeline {
    TextPipeline::new(PipelineSpec::default().with_reduction(mode)).unwrap()
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_example_default_config() {
    let out = pipeline(ReductionMode::Stem).transform(&[EXAMPLE]);
    assert_eq!(out, vec!["full bodi spici cherri aroma"]);
}

#[test]
fn test_example_empty_string() {
    for mode in [ReductionMode::Stem, ReductionMode::Lemmatize, ReductionMode::None] {
        assert_eq!(pipeline(mode).transform(&[""]), vec![String::new()]);
    }
}

#[test]
fn test_example_digits_and_case() {
    for mode in [ReductionMode::Stem, ReductionMode::Lemmatize, ReductionMode::None] {
        let p = pipeline(mode);
        let out = p.transform(&["THE wine IS 100% delicious"]);
        assert!(!out[0].chars().any(|c| c.is_ascii_digit() || c == '%'));
        for token in out[0].split_whitespace() {
            assert!(!p.stopwords().is_stopword(token), "{token} survived in {mode:?}");
        }
        assert!(out[0].starts_with("wine"));
    }
}

#[test]
fn test_example_identical_instances_agree() {
    let batch = [EXAMPLE, "Crisp green apple, 2018 vintage.", ""];
    for mode in [ReductionMode::Stem, ReductionMode::Lemmatize, ReductionMode::None] {
        assert_eq!(pipeline(mode).transform(&batch), pipeline(mode).transform(&batch));
    }
}

#[test]
fn test_reapplication_is_stable_on_examples() {
    let batch = [
        EXAMPLE,
        "THE wine IS 100% delicious",
        "Ripe plums and leaves, with a long finish",
        "The wine agreed with oaked fruitiness",
        "From head to feet",
    ];
    for mode in [ReductionMode::Stem, ReductionMode::Lemmatize, ReductionMode::None] {
        let p = pipeline(mode);
        let once = p.transform(&batch);
        assert_eq!(p.transform(&once), once, "not stable under {mode:?}");
    }
}

#[test]
fn test_unknown_language_rejected() {
    let err = TextPipeline::new(PipelineSpec::default().with_language("klingon")).unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedLanguage { .. }));
    assert!(err.to_string().contains("klingon"));
}

// ============================================================================
// Properties
// ============================================================================

fn record() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ,.!?'%\\-]{0,60}",
        any::<String>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_batch_length_and_order(batch in prop::collection::vec(record(), 0..8)) {
        for mode in [ReductionMode::Stem, ReductionMode::Lemmatize, ReductionMode::None] {
            let p = pipeline(mode);
            let out = p.transform(&batch);
            prop_assert_eq!(out.len(), batch.len());
            for (text, normalized) in batch.iter().zip(&out) {
                prop_assert_eq!(&p.transform_one(text), normalized);
            }
        }
    }

    #[test]
    fn prop_clean_is_idempotent(text in record()) {
        let once = clean(&text);
        prop_assert_eq!(clean(&once), once.clone());

        let kept = clean_with(&text, ContractionPolicy::Keep);
        prop_assert_eq!(clean_with(&kept, ContractionPolicy::Keep), kept);
    }

    #[test]
    fn prop_clean_leaves_only_letters_and_single_spaces(text in record()) {
        let cleaned = clean(&text);
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        prop_assert!(!cleaned.starts_with(' ') && !cleaned.ends_with(' '));
        prop_assert!(!cleaned.contains("  "));
    }

    #[test]
    fn prop_none_mode_is_filter_of_clean(text in record()) {
        let p = pipeline(ReductionMode::None);
        let expected = p.stopwords().filter(&clean(&text));
        prop_assert_eq!(p.transform(&[text.as_str()]), vec![expected]);
    }

    #[test]
    fn prop_none_mode_reapplication_is_stable(text in record()) {
        let p = pipeline(ReductionMode::None);
        let once = p.transform(&[text.as_str()]);
        prop_assert_eq!(p.transform(&once), once);
    }

    #[test]
    fn prop_stem_mode_reapplication_is_stable(text in record()) {
        let p = pipeline(ReductionMode::Stem);
        let once = p.transform(&[text.as_str()]);
        prop_assert_eq!(p.transform(&once), once);
    }

    #[test]
    fn prop_lemmatize_mode_reapplication_is_stable(text in record()) {
        let p = pipeline(ReductionMode::Lemmatize);
        let once = p.transform(&[text.as_str()]);
        prop_assert_eq!(p.transform(&once), once);
    }

    #[test]
    fn prop_filter_removes_exactly_the_stopwords(
        tokens in prop::collection::vec("[a-z]{1,6}", 0..12),
        stop in prop::collection::vec("[a-z]{1,6}", 0..6),
    ) {
        let stop_refs: Vec<&str> = stop.iter().map(String::as_str).collect();
        let filter = StopwordFilter::from_list(&stop_refs);
        let out = filter.filter(&tokens.join(" "));

        let expected: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !stop.iter().any(|s| s == t))
            .collect();
        prop_assert_eq!(out, expected.join(" "));
    }
}
