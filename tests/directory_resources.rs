use std::fs;
use std::path::Path;

use vintext::resources::{required_resources, ResourceKind};
use vintext::{
    DirectoryResources, Language, PipelineError, PipelineSpec, ReductionMode, ResourceProvider,
    TextPipeline,
};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Minimal NLTK-data style tree for English.
fn nltk_data() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "corpora/stopwords/english", "the\nbe\nand\n");
    write(root, "corpora/stopwords/french", "le\nla\net\n");
    write(root, "corpora/wordnet/index.noun", "plum n 1\nwine n 1\n");
    write(root, "corpora/wordnet/index.verb", "be v 1\n");
    write(root, "corpora/wordnet/index.adj", "ripe a 1\n");
    write(root, "corpora/wordnet/index.adv", "");
    write(root, "corpora/wordnet/verb.exc", "is be\n");

    let tagger = "taggers/averaged_perceptron_tagger_eng/averaged_perceptron_tagger_eng";
    write(root, &format!("{tagger}.weights.json"), r#"{"bias": {"NN": 1.0}}"#);
    write(
        root,
        &format!("{tagger}.tagdict.json"),
        r#"{"the": "DT", "plums": "NNS", "is": "VBZ", "ripe": "JJ"}"#,
    );
    write(
        root,
        &format!("{tagger}.classes.json"),
        r#"["DT", "JJ", "NN", "NNS", "VBZ"]"#,
    );
    dir
}

#[test]
fn test_lemmatize_with_directory_resources() {
    let data = nltk_data();
    let provider = DirectoryResources::new(data.path());
    let spec = PipelineSpec::default().with_reduction(ReductionMode::Lemmatize);
    let pipeline = TextPipeline::with_resources(spec, &provider).unwrap();

    assert_eq!(pipeline.transform(&["The plums IS ripe!"]), vec!["plum ripe"]);
}

#[test]
fn test_stem_with_directory_stopwords() {
    let data = nltk_data();
    let provider = DirectoryResources::new(data.path());
    let spec = PipelineSpec::default()
        .with_language("fr")
        .with_extra_stopwords(["vin"]);
    let pipeline = TextPipeline::with_resources(spec, &provider).unwrap();

    assert_eq!(pipeline.language(), Language::French);
    let out = pipeline.transform(&["Le vin et la cerise"]);
    assert_eq!(out.len(), 1);
    assert!(!out[0].split(' ').any(|t| ["le", "la", "et", "vin"].contains(&t)));
}

#[test]
fn test_empty_directory_reports_missing_resource() {
    let empty = tempfile::tempdir().unwrap();
    let provider = DirectoryResources::new(empty.path());

    let err = TextPipeline::with_resources(PipelineSpec::default(), &provider).unwrap_err();
    match err {
        PipelineError::MissingLanguageResource { resource, .. } => {
            assert_eq!(resource.kind, ResourceKind::Stopwords);
            assert_eq!(resource.language, Language::English);
        }
        other => panic!("expected MissingLanguageResource, got {other}"),
    }
}

#[test]
fn test_missing_tagger_detected_before_use() {
    let data = nltk_data();
    fs::remove_dir_all(data.path().join("taggers")).unwrap();
    let provider = DirectoryResources::new(data.path());

    let stem = TextPipeline::with_resources(PipelineSpec::default(), &provider);
    assert!(stem.is_ok());

    let spec = PipelineSpec::default().with_reduction(ReductionMode::Lemmatize);
    let err = TextPipeline::with_resources(spec, &provider).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::MissingLanguageResource { resource, .. } if resource.kind == ResourceKind::PosTagger
    ));
}

#[test]
fn test_provider_availability_matches_declared_resources() {
    let data = nltk_data();
    let provider = DirectoryResources::new(data.path());
    for id in required_resources(Language::English, ReductionMode::Lemmatize) {
        assert!(provider.has(&id), "{id} should be available");
    }
    for id in required_resources(Language::German, ReductionMode::Stem) {
        let expected = id.kind != ResourceKind::Stopwords;
        assert_eq!(provider.has(&id), expected, "{id}");
    }
}
