//! Core scoring engine for CPRGuard
//!
//! Reduces noisy chest-compression telemetry (rate, depth, force) into
//! session statistics and scores them with a Mamdani fuzzy engine.
//! Designed for edge devices sitting next to the sensor.
//!
//! Key constraints:
//! - Deterministic: the same samples score identically, bit for bit
//! - No panics in library code; bad numerics clamp or fall back
//! - no_std-capable (alloc required) for embedded deployment
//!
//! ```
//! use cprguard_core::{SessionScorer, TelemetrySample};
//!
//! let scorer = SessionScorer::new();
//! let samples = [
//!     TelemetrySample::new(0, 108, 5.2, 310.0),
//!     TelemetrySample::new(1_000, 112, 5.6, 325.0),
//! ];
//!
//! match scorer.score_samples(&samples) {
//!     Ok(report) => println!("score {:.2}", report.score.value),
//!     Err(e) => println!("nothing to score: {e}"),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod constants;
pub mod errors;
pub mod fuzzy;
pub mod report;
pub mod session;
pub mod telemetry;

mod util;

// Public API
pub use errors::{SessionError, SessionResult};
pub use fuzzy::{QualityScore, ScoreEngine, ScoreSurface};
pub use report::{ScoreReport, SessionScorer};
pub use session::{SessionAggregator, SessionReduction, SessionStats};
pub use telemetry::{SessionLog, TelemetrySample, Timestamp};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
