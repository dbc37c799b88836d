//! Fuzzy Variable Universes and Membership Breakpoints
//!
//! This module defines the tuned term tables for the scoring engine: the
//! domain interval of each linguistic variable and the triangular vertex
//! triples `(a, b, c)` of every term. The tables are fixed at build time;
//! re-tuning them is a source change, not a runtime configuration.

// ===== VARIABLE UNIVERSES =====

/// Lower bound of the depth universe (cm).
pub const DEPTH_MIN_CM: f32 = 0.0;

/// Upper bound of the depth universe (cm).
///
/// Compressions beyond 9 cm are outside any plausible adult chest
/// excursion; deeper readings clamp here before inference.
pub const DEPTH_MAX_CM: f32 = 9.0;

/// Lower bound of the rate universe (compressions per minute).
pub const RATE_MIN_CPM: f32 = 0.0;

/// Upper bound of the rate universe (compressions per minute).
///
/// Faster readings clamp here; 150 cpm already saturates the
/// `too_fast` term.
pub const RATE_MAX_CPM: f32 = 150.0;

/// Lower bound of the score universe.
pub const SCORE_MIN: f32 = 0.0;

/// Upper bound of the score universe.
pub const SCORE_MAX: f32 = 100.0;

// ===== DEPTH TERMS (cm) =====

/// Vertices of the `too_shallow` depth term.
///
/// Left shoulder: full membership at zero depth, fading out by 5 cm.
pub const DEPTH_TOO_SHALLOW: (f32, f32, f32) = (0.0, 0.0, 5.0);

/// Vertices of the `adequate` depth term.
///
/// Peaks at 5.5 cm, inside the 5-6 cm band resuscitation guidelines
/// recommend for adult compressions.
pub const DEPTH_ADEQUATE: (f32, f32, f32) = (4.0, 5.5, 7.0);

/// Vertices of the `too_deep` depth term.
///
/// Right shoulder: full membership from 9 cm up.
pub const DEPTH_TOO_DEEP: (f32, f32, f32) = (6.0, 9.0, 9.0);

// ===== RATE TERMS (cpm) =====

/// Vertices of the `too_slow` rate term.
///
/// Left shoulder: any rate under 100 cpm carries some slowness.
pub const RATE_TOO_SLOW: (f32, f32, f32) = (0.0, 0.0, 100.0);

/// Vertices of the `ideal` rate term.
///
/// Peaks at 110 cpm, centered on the 100-120 cpm guideline band.
pub const RATE_IDEAL: (f32, f32, f32) = (95.0, 110.0, 125.0);

/// Vertices of the `too_fast` rate term.
///
/// Right shoulder: saturates at the 150 cpm universe edge.
pub const RATE_TOO_FAST: (f32, f32, f32) = (120.0, 150.0, 150.0);

// ===== SCORE TERMS =====

/// Vertices of the `fix_both` score term (depth and rate both off).
pub const SCORE_FIX_BOTH: (f32, f32, f32) = (30.0, 30.0, 60.0);

/// Vertices of the `fix_depth` score term.
pub const SCORE_FIX_DEPTH: (f32, f32, f32) = (50.0, 60.0, 70.0);

/// Vertices of the `fix_rate` score term.
pub const SCORE_FIX_RATE: (f32, f32, f32) = (60.0, 70.0, 80.0);

/// Vertices of the `good_continue` score term.
///
/// Right shoulder: a clean session defuzzifies into the low 90s, not a
/// flat 100, because the centroid of this shoulder sits left of its peak.
pub const SCORE_GOOD_CONTINUE: (f32, f32, f32) = (80.0, 100.0, 100.0);

// ===== DEFUZZIFICATION =====

/// Sample points across the score universe (step 1.0 over [0, 100]).
pub const SCORE_SAMPLE_POINTS: usize = 101;

/// Spacing between consecutive score samples.
pub const SCORE_SAMPLE_STEP: f32 = 1.0;

/// Crisp score substituted when the aggregated surface carries no area.
///
/// Full-coverage terms make an empty surface unreachable from clamped
/// inputs; the fallback exists so the engine still cannot emit NaN.
pub const FALLBACK_SCORE: f32 = 0.0;

/// Total surface area below this threshold counts as degenerate.
pub const SURFACE_AREA_EPSILON: f32 = 1e-6;
