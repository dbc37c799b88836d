//! Centralized Constants for CPRGuard
//!
//! Every tuned number in the crate lives here with its rationale: fuzzy
//! term tables in [`fuzzy`], reduction thresholds in [`session`]. Modules
//! reference these by name so a re-tune touches exactly one file.

pub mod fuzzy;
pub mod session;

// Re-export the constants callers commonly need alongside the API.
pub use fuzzy::{FALLBACK_SCORE, SCORE_MAX, SCORE_MIN, SCORE_SAMPLE_POINTS};
pub use session::{DEPTH_NOISE_FLOOR_CM, FALLBACK_AVG_DEPTH_CM};
