//! Report composition: statistics plus score, and the end-to-end scorer.

use crate::errors::SessionResult;
use crate::fuzzy::{QualityScore, ScoreEngine};
use crate::session::{SessionAggregator, SessionStats};
use crate::telemetry::{SessionLog, TelemetrySample};

/// Session quality report handed to display and export collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreReport {
    /// Canonical session statistics.
    pub stats: SessionStats,
    /// Inference result over (average depth, last rate).
    pub score: QualityScore,
}

impl ScoreReport {
    /// Composes a report from its parts. Pure; cannot fail independently
    /// of its inputs.
    pub const fn compose(stats: SessionStats, score: QualityScore) -> Self {
        Self { stats, score }
    }
}

/// End-to-end scorer: reduction followed by inference.
///
/// Both components are immutable values, so a single scorer can be built
/// once and shared for the lifetime of the process:
///
/// ```
/// use cprguard_core::{SessionScorer, TelemetrySample};
///
/// static SCORER: SessionScorer = SessionScorer::new();
///
/// let samples = [
///     TelemetrySample::new(0, 108, 5.4, 310.0),
///     TelemetrySample::new(1_000, 112, 5.6, 325.0),
/// ];
/// let report = SCORER.score_samples(&samples).unwrap();
/// assert!(report.score.value > 80.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionScorer {
    aggregator: SessionAggregator,
    engine: ScoreEngine,
}

impl SessionScorer {
    /// Scorer with the default reduction policy and the tuned engine.
    pub const fn new() -> Self {
        Self {
            aggregator: SessionAggregator::new(),
            engine: ScoreEngine::new(),
        }
    }

    /// Replaces the reduction policy.
    pub const fn with_aggregator(mut self, aggregator: SessionAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// The reduction component.
    pub const fn aggregator(&self) -> &SessionAggregator {
        &self.aggregator
    }

    /// The inference component.
    pub const fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Scores a telemetry snapshot.
    ///
    /// Statistics flow one way into inference: the engine scores the
    /// rounded `avg_depth_cm` against the session's `last_rate_cpm`.
    pub fn score_samples(&self, samples: &[TelemetrySample]) -> SessionResult<ScoreReport> {
        let stats = self.aggregator.aggregate(samples)?;
        let score = self
            .engine
            .score(stats.avg_depth_cm, f32::from(stats.last_rate_cpm));
        Ok(ScoreReport::compose(stats, score))
    }

    /// Scores the current snapshot of a session log.
    pub fn score_log(&self, log: &SessionLog) -> SessionResult<ScoreReport> {
        self.score_samples(&log.snapshot())
    }
}

impl Default for SessionScorer {
    fn default() -> Self {
        Self::new()
    }
}
