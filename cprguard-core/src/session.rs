//! Session reduction: noisy telemetry snapshot to canonical statistics.
//!
//! ## Reduction policy
//!
//! Sensor buffers re-deliver windows and oscillate around release points,
//! so a raw session snapshot carries duplicates, idle windows, and
//! partial-release depths. Reduction runs in one pass:
//!
//! ```text
//! samples ──▶ validity filter ──▶ group by rate, ──▶ averages ──▶ SessionStats
//!             (idle, malformed)    keep max depth
//! ```
//!
//! - **Validity**: idle samples (`rate_cpm == 0`) and malformed samples
//!   (non-finite floats) are discarded and counted.
//! - **Dedup**: per distinct rate, the deepest sample is the canonical
//!   record; ties keep the first occurrence. The retained set comes back
//!   rate-ascending, mirroring how downstream exports list records.
//! - **Depth average**: retained depths must strictly exceed the noise
//!   floor to participate; a session with nothing above the floor gets
//!   the documented fallback constant and a flag, never NaN.
//! - **Force average**: over every retained record, no depth filter.
//! - **Last rate**: the highest retained rate, the closing figure of the
//!   rate-ordered session.
//!
//! Averages are rounded to two decimals before inference sees them, so
//! the scored inputs equal the reported inputs exactly.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::constants::session::{DEPTH_NOISE_FLOOR_CM, FALLBACK_AVG_DEPTH_CM};
use crate::errors::{SessionError, SessionResult};
use crate::telemetry::TelemetrySample;
use crate::util::round2;

/// Canonical statistics reduced from one session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    /// Mean depth over retained records above the noise floor (cm),
    /// rounded to two decimals.
    pub avg_depth_cm: f32,
    /// Mean force over all retained records (N), rounded to two decimals.
    pub avg_force_n: f32,
    /// Highest retained compression rate (cpm).
    pub last_rate_cpm: u16,
    /// Retained record count after dedup.
    pub sample_count: u32,
    /// True when no retained depth cleared the noise floor and the
    /// fallback average was substituted.
    pub depth_fallback: bool,
}

/// Outcome of a session reduction: canonical records plus statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReduction {
    retained: Vec<TelemetrySample>,
    stats: SessionStats,
}

impl SessionReduction {
    /// Canonical per-rate records, rate-ascending.
    pub fn retained(&self) -> &[TelemetrySample] {
        &self.retained
    }

    /// Reduced statistics.
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }
}

/// Reduces noisy telemetry snapshots into per-session statistics.
///
/// Thresholds default to the constants in
/// [`crate::constants::session`]; deployments with different sensors
/// override them at construction:
///
/// ```
/// use cprguard_core::SessionAggregator;
///
/// let aggregator = SessionAggregator::new().with_depth_noise_floor(3.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionAggregator {
    depth_noise_floor_cm: f32,
    fallback_avg_depth_cm: f32,
}

impl SessionAggregator {
    /// Aggregator with the default noise floor and fallback depth.
    pub const fn new() -> Self {
        Self {
            depth_noise_floor_cm: DEPTH_NOISE_FLOOR_CM,
            fallback_avg_depth_cm: FALLBACK_AVG_DEPTH_CM,
        }
    }

    /// Overrides the depth noise floor (cm).
    pub const fn with_depth_noise_floor(mut self, floor_cm: f32) -> Self {
        self.depth_noise_floor_cm = floor_cm;
        self
    }

    /// Overrides the fallback average depth (cm).
    pub const fn with_fallback_avg_depth(mut self, depth_cm: f32) -> Self {
        self.fallback_avg_depth_cm = depth_cm;
        self
    }

    /// Reduces a snapshot to canonical records and statistics.
    ///
    /// Input order does not matter; any permutation of the same samples
    /// reduces to the same result. Fails only when nothing survives the
    /// validity filter.
    pub fn reduce(&self, samples: &[TelemetrySample]) -> SessionResult<SessionReduction> {
        let mut discarded = 0_usize;
        let mut by_rate: BTreeMap<u16, TelemetrySample> = BTreeMap::new();
        for sample in samples {
            if !sample.is_active() || !sample.is_well_formed() {
                discarded += 1;
                continue;
            }
            match by_rate.get_mut(&sample.rate_cpm) {
                Some(kept) => {
                    if sample.depth_cm > kept.depth_cm {
                        *kept = *sample;
                    }
                }
                None => {
                    by_rate.insert(sample.rate_cpm, *sample);
                }
            }
        }
        if by_rate.is_empty() {
            return Err(SessionError::EmptySession { discarded });
        }

        let retained: Vec<TelemetrySample> = by_rate.into_values().collect();
        let mut depth_sum = 0.0_f32;
        let mut depth_n = 0_u32;
        let mut force_sum = 0.0_f32;
        let mut last_rate_cpm = 0_u16;
        for sample in &retained {
            if sample.depth_cm > self.depth_noise_floor_cm {
                depth_sum += sample.depth_cm;
                depth_n += 1;
            }
            force_sum += sample.force_n;
            // Rate-ascending iteration: the final value is the max rate.
            last_rate_cpm = sample.rate_cpm;
        }

        let (avg_depth_cm, depth_fallback) = if depth_n == 0 {
            (self.fallback_avg_depth_cm, true)
        } else {
            (round2(depth_sum / depth_n as f32), false)
        };
        let avg_force_n = round2(force_sum / retained.len() as f32);

        let stats = SessionStats {
            avg_depth_cm,
            avg_force_n,
            last_rate_cpm,
            sample_count: retained.len() as u32,
            depth_fallback,
        };
        Ok(SessionReduction { retained, stats })
    }

    /// Statistics only, discarding the retained records.
    pub fn aggregate(&self, samples: &[TelemetrySample]) -> SessionResult<SessionStats> {
        self.reduce(samples).map(|r| r.stats)
    }
}

impl Default for SessionAggregator {
    fn default() -> Self {
        Self::new()
    }
}
