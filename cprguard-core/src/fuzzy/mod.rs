//! Fuzzy Inference for Compression Quality Scoring
//!
//! ## Overview
//!
//! This module turns two crisp session figures, average compression depth
//! and closing compression rate, into one bounded quality score with an
//! actionable meaning. A Mamdani system fits the problem: clinical
//! guidance is written in words ("push 5 to 6 cm at 100 to 120 per
//! minute"), and word-shaped rules over overlapping terms degrade
//! gracefully between the bands instead of snapping at thresholds.
//!
//! ## Inference chain
//!
//! ```text
//! depth ──▶ clamp ──▶ too_shallow/adequate/too_deep ──┐
//!                                                     ├─▶ 9 rules (min)
//! rate ──▶ clamp ──▶ too_slow/ideal/too_fast ─────────┘      │
//!                                                            ▼
//!                                        clip consequents, union (max)
//!                                                            │
//!                                                            ▼
//!                    score ◀── round ◀── centroid of sampled surface
//! ```
//!
//! ## Determinism and sharing
//!
//! Term tables and the rule base are const data; the engine holds no
//! mutable state. Equal inputs produce bit-identical scores, and one
//! engine value serves any number of threads through `&self`.
//!
//! ## Usage
//!
//! ```
//! use cprguard_core::fuzzy::ScoreEngine;
//!
//! let engine = ScoreEngine::new();
//! let score = engine.score(5.5, 110.0);
//! assert!(score.value > 90.0);
//! ```

pub mod engine;
pub mod membership;
pub mod rules;

// Re-export main types
pub use engine::{QualityScore, ScoreEngine, ScoreSurface};
pub use membership::{TriangularMf, Universe};
pub use rules::{DepthTerm, RateTerm, Rule, ScoreTerm, RULE_BASE};
