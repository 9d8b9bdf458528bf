//! Pipeline runner: orchestrates stage execution over a batch.
//!
//! [`TextPipeline`] sequences Cleaner → Normalizer → Stop-word Filter. Each
//! stage runs over the whole batch before the next starts, and an optional
//! [`PipelineObserver`] is notified at every stage boundary.
//!
//! All fallible work happens at construction: language resolution, resource
//! checks and model loading. Once built, a pipeline is immutable and
//! `transform` cannot fail.

use std::fmt::Display;

use crate::errors::Result;
use crate::nlp::cleaner::Cleaner;
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::WordTokenizer;
use crate::pipeline::observer::{
    count_tokens, NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_CLEAN,
    STAGE_FILTER, STAGE_NORMALIZE,
};
use crate::pipeline::spec::PipelineSpec;
use crate::pipeline::traits::{
    LemmaNormalizer, NoopNormalizer, Normalizer, Reduction, StemNormalizer,
};
use crate::resources::{
    ensure_available, required_resources, BundledResources, ResourceId, ResourceProvider,
};
use crate::types::{ContractionPolicy, Language, ReductionMode};

/// Upper bound on extra normalize-and-filter passes for contextual strategies.
const MAX_SETTLE_PASSES: usize = 4;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// TextPipeline
// ============================================================================

/// A configured normalization pipeline.
///
/// Generic over the reduction strategy; [`Reduction`] covers the built-in
/// modes and is what the constructors produce. Swap in any other
/// [`Normalizer`] with [`TextPipeline::with_normalizer`].
#[derive(Debug)]
pub struct TextPipeline<N = Reduction> {
    spec: PipelineSpec,
    language: Language,
    cleaner: Cleaner,
    normalizer: N,
    stopwords: StopwordFilter,
}

impl TextPipeline<Reduction> {
    /// Build a pipeline from `spec` using compiled-in resources.
    pub fn new(spec: PipelineSpec) -> Result<Self> {
        Self::with_resources(spec, &BundledResources::new())
    }

    /// Build a pipeline with the default configuration (English, stemming).
    pub fn english() -> Result<Self> {
        Self::new(PipelineSpec::default())
    }

    /// Parse a JSON spec and build a pipeline from it.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(PipelineSpec::from_json(json)?)
    }

    /// Build a pipeline from `spec`, loading reference data from `provider`.
    ///
    /// Construction fails fast, before any stage is built:
    /// 1. the `PipelineSpec` is validated and its language resolved
    ///    ([`UnsupportedLanguage`], [`InvalidSpec`]);
    /// 2. every declared resource is checked against the provider
    ///    ([`MissingLanguageResource`]);
    /// 3. resources are loaded and the stages assembled.
    ///
    /// [`UnsupportedLanguage`]: crate::errors::PipelineError::UnsupportedLanguage
    /// [`InvalidSpec`]: crate::errors::PipelineError::InvalidSpec
    /// [`MissingLanguageResource`]: crate::errors::PipelineError::MissingLanguageResource
    pub fn with_resources(spec: PipelineSpec, provider: &dyn ResourceProvider) -> Result<Self> {
        let language = spec.validate()?;
        let required = required_resources(language, spec.reduction);
        ensure_available(provider, &required)?;

        let stopwords =
            StopwordFilter::from_words(provider.stopwords(language)?, spec.extra_stopwords());

        let normalizer = match spec.reduction {
            ReductionMode::Stem => Reduction::Stem(StemNormalizer::new(language)),
            ReductionMode::Lemmatize => Reduction::Lemmatize(LemmaNormalizer::new(
                WordTokenizer::new(language),
                provider.pos_tagger(language)?,
                Lemmatizer::new(provider.lemma_dictionary(language)?),
            )),
            ReductionMode::None => Reduction::None(NoopNormalizer),
        };

        #[cfg(feature = "tracing")]
        {
            let resources: Vec<String> = required.iter().map(ToString::to_string).collect();
            tracing::debug!(
                language = language.as_str(),
                mode = spec.reduction.as_str(),
                stopwords = stopwords.len(),
                resources = ?resources,
                "text pipeline constructed"
            );
        }

        Ok(Self {
            cleaner: Cleaner::new(spec.contractions),
            spec,
            language,
            normalizer,
            stopwords,
        })
    }
}

impl<N: Normalizer> TextPipeline<N> {
    /// Replace the reduction strategy, keeping cleaner and stop words.
    pub fn with_normalizer<M: Normalizer>(self, normalizer: M) -> TextPipeline<M> {
        TextPipeline {
            spec: self.spec,
            language: self.language,
            cleaner: self.cleaner,
            normalizer,
            stopwords: self.stopwords,
        }
    }

    pub fn spec(&self) -> &PipelineSpec {
        &self.spec
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn mode(&self) -> ReductionMode {
        self.normalizer.mode()
    }

    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Resources this configuration declared at construction.
    pub fn required_resources(&self) -> Vec<ResourceId> {
        required_resources(self.language, self.spec.reduction)
    }

    /// No-op: the pipeline has no learned parameters.
    pub fn fit<S: AsRef<str>>(&self, _batch: &[S]) -> &Self {
        self
    }

    /// Normalize a batch. Output has the same length and order as `batch`.
    pub fn transform<S: AsRef<str>>(&self, batch: &[S]) -> Vec<String> {
        self.transform_observed(batch, &mut NoopObserver)
    }

    /// Normalize a batch of non-string values through their `Display` form.
    pub fn transform_values<T: Display>(&self, batch: &[T]) -> Vec<String> {
        let texts: Vec<String> = batch.iter().map(ToString::to_string).collect();
        self.transform(&texts)
    }

    /// Normalize a single record.
    pub fn transform_one(&self, text: &str) -> String {
        let cleaned = self.cleaner.clean(text);
        let reduced = self.normalizer.normalize(&cleaned);
        self.settle(self.stopwords.filter(&reduced))
    }

    /// [`transform`](Self::transform) with stage callbacks.
    pub fn transform_observed<S, O>(&self, batch: &[S], observer: &mut O) -> Vec<String>
    where
        S: AsRef<str>,
        O: PipelineObserver,
    {
        let cleaned = run_stage(STAGE_CLEAN, batch, observer, |text| self.cleaner.clean(text));
        let reduced = run_stage(STAGE_NORMALIZE, &cleaned, observer, |text| {
            self.normalizer.normalize(text)
        });
        run_stage(STAGE_FILTER, &reduced, observer, |text| {
            self.settle(self.stopwords.filter(text))
        })
    }

    /// Re-run a contextual normalizer on its filtered output until the record
    /// is stable.
    ///
    /// Filtering drops neighbours the tagger saw on the first pass, so a
    /// second pass can tag a word differently: in `from head to feet` the
    /// word `feet` follows `to` and reads as a verb, but once `to` is
    /// filtered it is a plural noun.
    fn settle(&self, mut filtered: String) -> String {
        if !self.normalizer.is_contextual() {
            return filtered;
        }
        for _ in 0..MAX_SETTLE_PASSES {
            let next = self.stopwords.filter(&self.normalizer.normalize(&filtered));
            if next == filtered {
                break;
            }
            filtered = next;
        }
        filtered
    }
}

/// Apply `f` to every record and report the stage to `observer`.
fn run_stage<S, O, F>(stage: &'static str, input: &[S], observer: &mut O, f: F) -> Vec<String>
where
    S: AsRef<str>,
    O: PipelineObserver,
    F: Fn(&str) -> String,
{
    trace_stage!(stage);
    observer.on_stage_start(stage);
    let clock = StageClock::start();
    let output: Vec<String> = input.iter().map(|record| f(record.as_ref())).collect();
    let report = StageReportBuilder::new(clock.elapsed())
        .records(output.len())
        .tokens_in(count_tokens(input))
        .tokens_out(count_tokens(&output))
        .build();
    observer.on_stage_end(stage, &report);
    observer.on_batch(stage, &output);
    output
}

// ============================================================================
// PipelineBuilder
// ============================================================================

/// Fluent builder for [`TextPipeline`].
///
/// ```
/// # use vintext::pipeline::runner::PipelineBuilder;
/// # use vintext::types::ReductionMode;
/// let pipeline = PipelineBuilder::new()
///     .language("en")
///     .reduction(ReductionMode::Lemmatize)
///     .extra_stopwords(["wine"])
///     .build()
///     .unwrap();
/// assert_eq!(pipeline.transform(&["A ripe wine"]), vec!["ripe"]);
/// ```
#[derive(Default)]
pub struct PipelineBuilder {
    spec: PipelineSpec,
    resources: Option<Box<dyn ResourceProvider>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing spec.
    pub fn from_spec(spec: PipelineSpec) -> Self {
        Self {
            spec,
            resources: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.spec.language = language.into();
        self
    }

    pub fn reduction(mut self, reduction: ReductionMode) -> Self {
        self.spec.reduction = reduction;
        self
    }

    pub fn contractions(mut self, contractions: ContractionPolicy) -> Self {
        self.spec.contractions = contractions;
        self
    }

    pub fn extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec = self.spec.with_extra_stopwords(words);
        self
    }

    /// Load reference data from `provider` instead of the bundled set.
    pub fn resources(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.resources = Some(Box::new(provider));
        self
    }

    pub fn build(self) -> Result<TextPipeline> {
        match self.resources {
            Some(provider) => TextPipeline::with_resources(self.spec, provider.as_ref()),
            None => TextPipeline::new(self.spec),
        }
    }
}
