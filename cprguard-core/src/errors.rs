//! Error types for session reduction and scoring.
//!
//! The surface is deliberately narrow. Bad numerics never become errors:
//! the engine clamps out-of-domain inputs and the aggregator discards
//! malformed samples. Degenerate defuzzification falls back to a flagged
//! zero score. What remains is the one situation a caller must handle:
//! a snapshot with nothing left to score.

use thiserror_no_std::Error;

/// Result type for session reduction operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors produced while reducing a telemetry session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Every sample in the snapshot was idle (zero rate) or malformed
    /// (non-finite field), leaving no record to score.
    #[error("empty session: {discarded} idle or malformed samples discarded")]
    EmptySession {
        /// Samples dropped by the validity filter.
        discarded: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SessionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SessionError::EmptySession { discarded } => {
                defmt::write!(fmt, "empty session ({} discarded)", discarded)
            }
        }
    }
}
