//! Pipeline observer: hooks for logging, profiling and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing the intermediate
//! batch after each stage and emitting structured telemetry.

use std::time::{Duration, Instant};

// ============================================================================
// Stage names
// ============================================================================

pub const STAGE_CLEAN: &str = "clean";
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_FILTER: &str = "filter";

// ============================================================================
// StageClock / StageReport
// ============================================================================

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage did to one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    records: usize,
    tokens_in: Option<usize>,
    tokens_out: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of batch elements processed.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Whitespace-separated tokens entering the stage, if measured.
    pub fn tokens_in(&self) -> Option<usize> {
        self.tokens_in
    }

    /// Whitespace-separated tokens leaving the stage, if measured.
    pub fn tokens_out(&self) -> Option<usize> {
        self.tokens_out
    }
}

/// Fluent construction for [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn records(mut self, records: usize) -> Self {
        self.report.records = records;
        self
    }

    pub fn tokens_in(mut self, tokens: usize) -> Self {
        self.report.tokens_in = Some(tokens);
        self
    }

    pub fn tokens_out(mut self, tokens: usize) -> Self {
        self.report.tokens_out = Some(tokens);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Count whitespace-separated tokens across a batch.
pub(crate) fn count_tokens<S: AsRef<str>>(batch: &[S]) -> usize {
    batch
        .iter()
        .map(|s| s.as_ref().split_whitespace().count())
        .sum()
}

// ============================================================================
// PipelineObserver
// ============================================================================

/// Callbacks fired by [`TextPipeline::transform_observed`].
///
/// Every method has an empty default, so implementors only override what
/// they need.
///
/// [`TextPipeline::transform_observed`]: super::runner::TextPipeline::transform_observed
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The batch as it leaves `stage`.
    fn on_batch(&mut self, _stage: &'static str, _batch: &[String]) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects one [`StageReport`] per completed stage, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Sum of all stage durations.
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .records(2)
            .tokens_in(10)
            .tokens_out(6)
            .build();
        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.records(), 2);
        assert_eq!(report.tokens_in(), Some(10));
        assert_eq!(report.tokens_out(), Some(6));
    }

    #[test]
    fn test_plain_report_has_no_token_counts() {
        let report = StageReport::new(Duration::ZERO);
        assert_eq!(report.tokens_in(), None);
        assert_eq!(report.records(), 0);
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_start(STAGE_CLEAN);
        obs.on_stage_end(STAGE_CLEAN, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_FILTER, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<_> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_CLEAN, STAGE_FILTER]);
        assert_eq!(obs.total(), Duration::from_millis(3));

        obs.clear();
        assert!(obs.reports().is_empty());
    }

    #[test]
    fn test_count_tokens() {
        assert_eq!(count_tokens(&["a b c", "", "d"]), 4);
        assert_eq!(count_tokens::<&str>(&[]), 0);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        assert!(clock.elapsed() >= first);
    }
}
