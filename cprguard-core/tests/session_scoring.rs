//! Integration tests for end-to-end session scoring
//!
//! Drives the complete data flow from raw telemetry snapshots through
//! validity filtering, per-rate dedup, averaging, and fuzzy inference,
//! checking the report against values recomputed through the public
//! surface API.

#![cfg(test)]

use cprguard_core::{
    SessionAggregator, SessionError, SessionLog, SessionScorer, TelemetrySample,
};

use proptest::prelude::*;

/// A realistic noisy session: idle windows, duplicated rates with
/// shallower re-deliveries, one below-floor compression run.
fn noisy_session() -> Vec<TelemetrySample> {
    vec![
        TelemetrySample::new(0, 0, 0.0, 0.0),
        TelemetrySample::new(500, 95, 4.8, 280.0),
        TelemetrySample::new(1_000, 110, 5.4, 300.0),
        TelemetrySample::new(1_500, 110, 5.9, 315.0),
        TelemetrySample::new(2_000, 118, 3.2, 220.0),
        TelemetrySample::new(2_500, 0, 2.0, 50.0),
        TelemetrySample::new(3_000, 103, 6.1, 340.0),
        TelemetrySample::new(3_500, 95, 4.1, 260.0),
    ]
}

#[test]
fn test_noisy_session_reduces_to_expected_stats() {
    let report = SessionScorer::new()
        .score_samples(&noisy_session())
        .unwrap();

    // Retained: 95 -> 4.8, 103 -> 6.1, 110 -> 5.9, 118 -> 3.2.
    assert_eq!(report.stats.sample_count, 4);
    assert_eq!(report.stats.last_rate_cpm, 118);
    // Depth average over {4.8, 6.1, 5.9}; 3.2 sits below the floor.
    assert_eq!(report.stats.avg_depth_cm, 5.6);
    // Force average over all four retained records.
    assert_eq!(report.stats.avg_force_n, 288.75);
    assert!(!report.stats.depth_fallback);
}

#[test]
fn test_score_equals_centroid_recomputed_through_surface() {
    let scorer = SessionScorer::new();
    let report = scorer.score_samples(&noisy_session()).unwrap();

    let raw = scorer
        .engine()
        .surface(
            report.stats.avg_depth_cm,
            f32::from(report.stats.last_rate_cpm),
        )
        .centroid()
        .unwrap();
    let expected = (raw * 100.0).round() / 100.0;

    assert_eq!(report.score.value, expected);
    assert!(report.score.value > 80.0 && report.score.value < 100.0);
    assert!(!report.score.degenerate);
}

#[test]
fn test_scoring_is_deterministic_across_runs() {
    let scorer = SessionScorer::new();
    let first = scorer.score_samples(&noisy_session()).unwrap();
    let second = scorer.score_samples(&noisy_session()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sample_order_does_not_change_the_report() {
    let scorer = SessionScorer::new();
    let mut reversed = noisy_session();
    reversed.reverse();
    assert_eq!(
        scorer.score_samples(&noisy_session()).unwrap(),
        scorer.score_samples(&reversed).unwrap()
    );
}

#[test]
fn test_rate_past_universe_edge_scores_like_the_edge() {
    let scorer = SessionScorer::new();
    let at_edge = [TelemetrySample::new(0, 150, 5.5, 300.0)];
    let past_edge = [TelemetrySample::new(0, 151, 5.5, 300.0)];
    let a = scorer.score_samples(&at_edge).unwrap();
    let b = scorer.score_samples(&past_edge).unwrap();
    assert_eq!(a.score, b.score);
}

#[test]
fn test_all_shallow_session_scores_the_fallback_depth() {
    let scorer = SessionScorer::new();
    let samples = [
        TelemetrySample::new(0, 104, 3.0, 180.0),
        TelemetrySample::new(1_000, 112, 3.8, 190.0),
    ];
    let report = scorer.score_samples(&samples).unwrap();
    assert!(report.stats.depth_fallback);
    assert_eq!(report.stats.avg_depth_cm, 2.34);
    // 2.34 cm sits deep in too_shallow; the session reads as a depth problem.
    assert!(report.score.value < 70.0);
}

#[test]
fn test_all_idle_session_is_empty() {
    let scorer = SessionScorer::new();
    let samples = [
        TelemetrySample::new(0, 0, 0.0, 0.0),
        TelemetrySample::new(1_000, 0, 0.0, 0.0),
    ];
    assert_eq!(
        scorer.score_samples(&samples),
        Err(SessionError::EmptySession { discarded: 2 })
    );
}

#[test]
fn test_log_replay_is_idempotent() {
    let scorer = SessionScorer::new();
    let mut log = SessionLog::new();
    log.record_all(noisy_session());
    let once = scorer.score_log(&log).unwrap();

    // Re-delivering the same snapshot adds nothing and changes nothing.
    assert_eq!(log.record_all(noisy_session()), 0);
    let twice = scorer.score_log(&log).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_custom_floor_reshapes_the_report() {
    let lenient = SessionScorer::new()
        .with_aggregator(SessionAggregator::new().with_depth_noise_floor(3.0));
    let report = lenient.score_samples(&noisy_session()).unwrap();
    // 3.2 now participates: {3.2, 4.8, 6.1, 5.9} averages to 5.0.
    assert_eq!(report.stats.avg_depth_cm, 5.0);
}

proptest! {
    #[test]
    fn score_is_always_bounded(depth in -50.0_f32..50.0, rate in -100.0_f32..500.0) {
        let scorer = SessionScorer::new();
        let score = scorer.engine().score(depth, rate);
        prop_assert!(score.value.is_finite());
        prop_assert!((0.0..=100.0).contains(&score.value));
    }

    #[test]
    fn clamping_is_idempotent(x in -1.0e6_f32..1.0e6) {
        let scorer = SessionScorer::new();
        let engine = scorer.engine();
        for universe in [
            engine.depth_universe(),
            engine.rate_universe(),
            engine.score_universe(),
        ] {
            let once = universe.clamp(x);
            prop_assert_eq!(universe.clamp(once), once);
            prop_assert!(once >= universe.lo() && once <= universe.hi());
        }
    }

    #[test]
    fn reduction_never_panics_and_counts_add_up(
        samples in prop::collection::vec(
            (0_u64..10_000, 0_u16..200, -2.0_f32..10.0, 0.0_f32..500.0),
            0..64,
        )
    ) {
        let samples: Vec<_> = samples
            .into_iter()
            .map(|(t, r, d, f)| TelemetrySample::new(t, r, d, f))
            .collect();
        let aggregator = SessionAggregator::new();
        match aggregator.reduce(&samples) {
            Ok(reduction) => {
                let stats = reduction.stats();
                prop_assert!(stats.sample_count as usize <= samples.len());
                prop_assert!(stats.avg_depth_cm.is_finite());
                prop_assert!(stats.avg_force_n.is_finite());
                prop_assert_eq!(reduction.retained().len() as u32, stats.sample_count);
            }
            Err(SessionError::EmptySession { discarded }) => {
                prop_assert_eq!(discarded, samples.len());
            }
        }
    }
}
