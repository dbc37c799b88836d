//! Telemetry sample model and per-session log.
//!
//! ## Sample contract
//!
//! Producers emit one [`TelemetrySample`] per reporting window whether or
//! not compressions are in progress; a zero `rate_cpm` marks an idle
//! window. Fields are plain data so any transport can carry them; the
//! only well-formedness requirement downstream is finite floats.
//!
//! ## Session log
//!
//! [`SessionLog`] is the explicit session state a caller owns and threads
//! through calls. Samples are keyed by timestamp, so re-delivered
//! snapshots (retried uploads, replayed queues) are idempotent: the first
//! record for a timestamp wins and later duplicates are ignored.
//! Aggregation never sees the live log, only the owned copy returned by
//! [`SessionLog::snapshot`].

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

/// Milliseconds since an epoch chosen by the telemetry producer.
pub type Timestamp = u64;

/// One chest-compression telemetry reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetrySample {
    /// Producer timestamp in milliseconds.
    pub timestamp_ms: Timestamp,
    /// Compression rate in compressions per minute. Zero when idle.
    pub rate_cpm: u16,
    /// Compression depth in centimeters.
    pub depth_cm: f32,
    /// Compression force in newtons.
    pub force_n: f32,
}

impl TelemetrySample {
    /// Creates a sample from raw field values.
    pub const fn new(timestamp_ms: Timestamp, rate_cpm: u16, depth_cm: f32, force_n: f32) -> Self {
        Self {
            timestamp_ms,
            rate_cpm,
            depth_cm,
            force_n,
        }
    }

    /// Whether the reporting window saw compression activity.
    pub const fn is_active(&self) -> bool {
        self.rate_cpm != 0
    }

    /// Whether every float field is finite.
    ///
    /// Range contracts (`depth_cm >= 0`, `force_n >= 0`) stay with the
    /// producer; reduction only requires finite numbers.
    pub fn is_well_formed(&self) -> bool {
        self.depth_cm.is_finite() && self.force_n.is_finite()
    }
}

/// Accumulated samples for one resuscitation session.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    entries: BTreeMap<Timestamp, TelemetrySample>,
}

impl SessionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Records a sample keyed by its timestamp.
    ///
    /// Returns `false` without modifying the log when the timestamp was
    /// already recorded.
    pub fn record(&mut self, sample: TelemetrySample) -> bool {
        if self.entries.contains_key(&sample.timestamp_ms) {
            return false;
        }
        self.entries.insert(sample.timestamp_ms, sample);
        true
    }

    /// Records every sample from an iterator, returning how many were new.
    pub fn record_all<I>(&mut self, samples: I) -> usize
    where
        I: IntoIterator<Item = TelemetrySample>,
    {
        samples.into_iter().filter(|s| self.record(*s)).count()
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no samples.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears the log for a new session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Timestamp-ascending copy of the recorded samples.
    ///
    /// This owned snapshot is what aggregation consumes; a recorder
    /// appending concurrently can never race a reader through it.
    pub fn snapshot(&self) -> Vec<TelemetrySample> {
        self.entries.values().copied().collect()
    }
}
