//! Mamdani scoring engine.
//!
//! ## Pipeline
//!
//! One call to [`ScoreEngine::score`] runs the full inference chain:
//!
//! ```text
//! (depth, rate) ──▶ clamp ──▶ fire 9 rules ──▶ clip consequents
//!                                                   │ max-union
//!                                                   ▼
//!     score ◀── round(2dp) ◀── centroid ◀── sampled surface [0..100]
//! ```
//!
//! The output surface is sampled at 101 points (step 1.0) and the
//! centroid is the exact center of gravity of the piecewise-linear
//! surface through those samples. Vertical term edges (shoulder plateaus
//! at a universe bound, the `fix_both` left edge) contribute a one-step
//! wedge under this construction. The score bands were tuned on the
//! sampled surface, so it is integrated as sampled, never smoothed
//! analytically.
//!
//! ## Failure posture
//!
//! Scoring never fails. Out-of-domain and non-finite inputs clamp at
//! the universe bounds; an aggregated surface with no area, which full
//! term coverage makes unreachable from clamped inputs, falls back to
//! [`FALLBACK_SCORE`] with the `degenerate` flag raised.

use super::membership::Universe;
use super::rules::{ScoreTerm, RULE_BASE};
use crate::constants::fuzzy::{
    DEPTH_MAX_CM, DEPTH_MIN_CM, FALLBACK_SCORE, RATE_MAX_CPM, RATE_MIN_CPM, SCORE_MAX, SCORE_MIN,
    SCORE_SAMPLE_POINTS, SCORE_SAMPLE_STEP, SURFACE_AREA_EPSILON,
};
use crate::util::round2;

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Crisp session quality score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityScore {
    /// Defuzzified score in [0, 100], rounded to two decimals.
    pub value: f32,
    /// True when the defuzzification fallback produced the value.
    pub degenerate: bool,
}

/// Aggregated output membership sampled across the score universe.
///
/// Exposed so tests can recompute the centroid through the public API
/// and so plotting or export collaborators can draw the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSurface {
    samples: [f32; SCORE_SAMPLE_POINTS],
}

impl ScoreSurface {
    /// Sampled membership values, index `i` holding the membership at
    /// score `i`.
    pub const fn samples(&self) -> &[f32; SCORE_SAMPLE_POINTS] {
        &self.samples
    }

    /// Iterator over `(score, membership)` points.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &mu)| (SCORE_MIN + SCORE_SAMPLE_STEP * i as f32, mu))
    }

    /// Center of gravity of the piecewise-linear surface.
    ///
    /// Each segment between samples decomposes into one of four shapes:
    /// flat strip, wedge rising from zero, wedge falling to zero, or a
    /// general trapezoid. Returns `None` when the total area is below
    /// [`SURFACE_AREA_EPSILON`].
    pub fn centroid(&self) -> Option<f32> {
        let mut area_sum = 0.0_f32;
        let mut moment_sum = 0.0_f32;
        for i in 1..SCORE_SAMPLE_POINTS {
            let y1 = self.samples[i - 1];
            let y2 = self.samples[i];
            if y1 == 0.0 && y2 == 0.0 {
                continue;
            }
            let x1 = SCORE_MIN + SCORE_SAMPLE_STEP * (i - 1) as f32;
            let w = SCORE_SAMPLE_STEP;
            let (area, center) = if y1 == y2 {
                (w * y1, x1 + 0.5 * w)
            } else if y1 == 0.0 {
                (0.5 * w * y2, x1 + w * (2.0 / 3.0))
            } else if y2 == 0.0 {
                (0.5 * w * y1, x1 + w / 3.0)
            } else {
                (
                    0.5 * w * (y1 + y2),
                    x1 + w * (2.0 * y2 + y1) / (3.0 * (y1 + y2)),
                )
            };
            area_sum += area;
            moment_sum += area * center;
        }
        if area_sum <= SURFACE_AREA_EPSILON {
            None
        } else {
            Some(moment_sum / area_sum)
        }
    }
}

/// Mamdani scoring engine over (depth, rate).
///
/// Construction is `const` and the engine is immutable, so one value can
/// sit in a `static` and be shared across threads without
/// synchronization.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEngine {
    depth_universe: Universe,
    rate_universe: Universe,
    score_universe: Universe,
}

impl ScoreEngine {
    /// Creates the engine with the tuned term tables.
    pub const fn new() -> Self {
        Self {
            depth_universe: Universe::new(DEPTH_MIN_CM, DEPTH_MAX_CM),
            rate_universe: Universe::new(RATE_MIN_CPM, RATE_MAX_CPM),
            score_universe: Universe::new(SCORE_MIN, SCORE_MAX),
        }
    }

    /// Depth input domain.
    pub const fn depth_universe(&self) -> Universe {
        self.depth_universe
    }

    /// Rate input domain.
    pub const fn rate_universe(&self) -> Universe {
        self.rate_universe
    }

    /// Score output domain.
    pub const fn score_universe(&self) -> Universe {
        self.score_universe
    }

    /// Scores one (average depth, last rate) pair.
    pub fn score(&self, depth_cm: f32, rate_cpm: f32) -> QualityScore {
        match self.surface(depth_cm, rate_cpm).centroid() {
            Some(raw) => QualityScore {
                value: round2(raw),
                degenerate: false,
            },
            None => {
                log_warn!(
                    "score surface empty for depth={} rate={}, using fallback",
                    depth_cm,
                    rate_cpm
                );
                QualityScore {
                    value: FALLBACK_SCORE,
                    degenerate: true,
                }
            }
        }
    }

    /// Rule firing strengths folded per consequent term (max over the
    /// rules sharing a consequent). Inputs are clamped first.
    pub fn consequent_strengths(&self, depth_cm: f32, rate_cpm: f32) -> [f32; ScoreTerm::COUNT] {
        let depth = self.depth_universe.clamp(depth_cm);
        let rate = self.rate_universe.clamp(rate_cpm);
        let mut strengths = [0.0_f32; ScoreTerm::COUNT];
        for rule in &RULE_BASE {
            let s = rule.strength(depth, rate);
            let slot = &mut strengths[rule.then as usize];
            if s > *slot {
                *slot = s;
            }
        }
        strengths
    }

    /// Aggregated output surface for one input pair: every consequent
    /// clipped at its strength, then unioned point-wise with max.
    pub fn surface(&self, depth_cm: f32, rate_cpm: f32) -> ScoreSurface {
        let strengths = self.consequent_strengths(depth_cm, rate_cpm);
        let mut samples = [0.0_f32; SCORE_SAMPLE_POINTS];
        for (i, slot) in samples.iter_mut().enumerate() {
            let x = self.score_universe.lo() + SCORE_SAMPLE_STEP * i as f32;
            let mut mu = 0.0_f32;
            for term in ScoreTerm::ALL {
                let clipped = term.mf().membership(x).min(strengths[term as usize]);
                mu = mu.max(clipped);
            }
            *slot = mu;
        }
        ScoreSurface { samples }
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
