//! # vintext
//!
//! Normalization of free-text wine descriptions ahead of classification.
//!
//! A [`TextPipeline`] runs three stages over a batch of records:
//!
//! 1. **Clean**: strip digits and punctuation, fold case.
//! 2. **Normalize**: stem, lemmatize or leave words as they are.
//! 3. **Filter**: drop stop words for the configured language.
//!
//! ```
//! use vintext::{PipelineSpec, ReductionMode, TextPipeline};
//!
//! let pipeline = TextPipeline::new(PipelineSpec::default()).unwrap();
//! let out = pipeline.transform(&["THE wine IS 100% delicious"]);
//! assert_eq!(out, vec!["wine delici"]);
//!
//! let lemma = TextPipeline::new(
//!     PipelineSpec::default().with_reduction(ReductionMode::Lemmatize),
//! )
//! .unwrap();
//! assert_eq!(lemma.transform(&["Ripe plums"]), vec!["ripe plum"]);
//! ```
//!
//! Construction is the only fallible step. Language support and reference
//! data are checked up front through a [`resources::ResourceProvider`];
//! `transform` itself never fails.

pub mod errors;
pub mod nlp;
pub mod origin;
pub mod pipeline;
pub mod resources;
pub mod types;

pub use errors::{Capability, PipelineError, Result};
pub use origin::{Classifier, OriginCatalog, OriginField, OriginRecord, WineIdentifier};
pub use pipeline::{PipelineBuilder, PipelineSpec, TextPipeline};
pub use resources::{BundledResources, DirectoryResources, ResourceId, ResourceProvider};
pub use types::{ContractionPolicy, Language, ReductionMode};
