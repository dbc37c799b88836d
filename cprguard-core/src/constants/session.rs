//! Session Reduction Thresholds
//!
//! Constants governing how a raw telemetry snapshot is reduced to
//! per-session statistics. Both values are defaults; the aggregator
//! exposes builder overrides for deployments with different sensors.

// ===== DEPTH FILTERING =====

/// Depth noise floor for the session average (cm).
///
/// Retained depths must strictly exceed this to count toward
/// `avg_depth_cm`. Partial releases and sensor settling commonly read
/// below 4 cm and would drag the average under the guideline band.
pub const DEPTH_NOISE_FLOOR_CM: f32 = 4.0;

/// Substitute average depth when no retained depth clears the floor (cm).
///
/// Keeps the depth average finite for sessions where every compression
/// was shallow, and lands deep inside `too_shallow` so such sessions
/// score as depth problems rather than as missing data.
pub const FALLBACK_AVG_DEPTH_CM: f32 = 2.34;
