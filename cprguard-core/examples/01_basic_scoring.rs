//! Basic Quality Scoring Example
//!
//! This example demonstrates the simplest use case of CPRGuard: scoring
//! (depth, rate) pairs directly with the fuzzy engine.
//!
//! ## What You'll Learn
//!
//! - Creating the scoring engine
//! - Scoring crisp inputs, including out-of-domain ones
//! - Inspecting rule activations and the output surface
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_scoring
//! ```

use cprguard_core::fuzzy::{ScoreEngine, ScoreTerm};

fn main() {
    println!("CPRGuard Basic Scoring Example");
    println!("==============================\n");

    let engine = ScoreEngine::new();
    println!(
        "Input domains: depth [{}, {}] cm, rate [{}, {}] cpm\n",
        engine.depth_universe().lo(),
        engine.depth_universe().hi(),
        engine.rate_universe().lo(),
        engine.rate_universe().hi(),
    );

    // A spread of sessions, from textbook to clearly off.
    let cases = [
        ("guideline depth and rate", 5.5, 110.0),
        ("shallow at a good rate", 2.0, 110.0),
        ("good depth, too slow", 5.5, 70.0),
        ("deep and fast", 7.5, 140.0),
        ("sensor glitch (clamped)", 12.0, 180.0),
    ];

    for (label, depth, rate) in cases {
        let score = engine.score(depth, rate);
        println!(
            "{label:28} depth {depth:5.1} cm  rate {rate:5.1} cpm  ->  {:6.2}",
            score.value
        );
    }

    // Which consequents drove the shallow session?
    println!("\nConsequent strengths for the shallow session:");
    let strengths = engine.consequent_strengths(2.0, 110.0);
    for term in ScoreTerm::ALL {
        println!("  {:14} {:.3}", term.name(), strengths[term as usize]);
    }

    // The aggregated surface behind its score.
    let surface = engine.surface(2.0, 110.0);
    if let Some(raw) = surface.centroid() {
        println!("\nSurface centroid before rounding: {raw:.4}");
    }
}
