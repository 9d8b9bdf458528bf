//! Pipeline specification and execution.
//!
//! ## Submodules
//!
//! - [`spec`]: serde-deserializable pipeline configuration
//! - [`traits`]: the `Normalizer` strategy and its built-in implementations
//! - [`runner`]: `TextPipeline` orchestration and `PipelineBuilder`
//! - [`observer`]: stage timing and debug hooks

pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;

pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGE_CLEAN, STAGE_FILTER, STAGE_NORMALIZE,
};

pub use runner::{PipelineBuilder, TextPipeline};

pub use spec::{PipelineSpec, SPEC_VERSION};

pub use traits::{LemmaNormalizer, NoopNormalizer, Normalizer, Reduction, StemNormalizer};
