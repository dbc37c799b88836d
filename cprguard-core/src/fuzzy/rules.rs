//! Linguistic terms and the fixed inference rule base.
//!
//! Three variables describe a session: compression depth, compression
//! rate, and the quality score the engine produces. Terms are small
//! enums backed by const vertex tables in [`crate::constants::fuzzy`],
//! so the whole rule base lives in read-only memory and the engine can
//! be built in a `const` context.
//!
//! The rule matrix (AND joins antecedents, strength is the min):
//!
//! ```text
//! depth \ rate   too_slow     ideal          too_fast
//! too_shallow    fix_both     fix_depth      fix_both
//! adequate       fix_rate     good_continue  fix_rate
//! too_deep       fix_both     fix_depth      fix_both
//! ```

use super::membership::TriangularMf;
use crate::constants::fuzzy::{
    DEPTH_ADEQUATE, DEPTH_TOO_DEEP, DEPTH_TOO_SHALLOW, RATE_IDEAL, RATE_TOO_FAST, RATE_TOO_SLOW,
    SCORE_FIX_BOTH, SCORE_FIX_DEPTH, SCORE_FIX_RATE, SCORE_GOOD_CONTINUE,
};

const fn tri(vertices: (f32, f32, f32)) -> TriangularMf {
    TriangularMf::new(vertices.0, vertices.1, vertices.2)
}

/// Linguistic terms over compression depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthTerm {
    /// Compressions not reaching useful depth.
    TooShallow,
    /// Depth inside the effective band.
    Adequate,
    /// Compressions risking injury.
    TooDeep,
}

impl DepthTerm {
    /// All depth terms.
    pub const ALL: [DepthTerm; 3] = [Self::TooShallow, Self::Adequate, Self::TooDeep];

    /// Term label as used in the tuned model.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TooShallow => "too_shallow",
            Self::Adequate => "adequate",
            Self::TooDeep => "too_deep",
        }
    }

    /// Membership function for this term.
    pub const fn mf(self) -> TriangularMf {
        match self {
            Self::TooShallow => tri(DEPTH_TOO_SHALLOW),
            Self::Adequate => tri(DEPTH_ADEQUATE),
            Self::TooDeep => tri(DEPTH_TOO_DEEP),
        }
    }

    /// Membership of an already clamped depth reading.
    pub fn membership(self, depth_cm: f32) -> f32 {
        self.mf().membership(depth_cm)
    }
}

/// Linguistic terms over compression rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTerm {
    /// Rate below the effective band.
    TooSlow,
    /// Rate inside the effective band.
    Ideal,
    /// Rate above the effective band.
    TooFast,
}

impl RateTerm {
    /// All rate terms.
    pub const ALL: [RateTerm; 3] = [Self::TooSlow, Self::Ideal, Self::TooFast];

    /// Term label as used in the tuned model.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TooSlow => "too_slow",
            Self::Ideal => "ideal",
            Self::TooFast => "too_fast",
        }
    }

    /// Membership function for this term.
    pub const fn mf(self) -> TriangularMf {
        match self {
            Self::TooSlow => tri(RATE_TOO_SLOW),
            Self::Ideal => tri(RATE_IDEAL),
            Self::TooFast => tri(RATE_TOO_FAST),
        }
    }

    /// Membership of an already clamped rate reading.
    pub fn membership(self, rate_cpm: f32) -> f32 {
        self.mf().membership(rate_cpm)
    }
}

/// Consequent terms over the quality score.
///
/// Discriminants index per-term strength tables during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScoreTerm {
    /// Depth and rate both need correction.
    FixBoth = 0,
    /// Depth needs correction.
    FixDepth = 1,
    /// Rate needs correction.
    FixRate = 2,
    /// Keep going as-is.
    GoodContinue = 3,
}

impl ScoreTerm {
    /// Number of score terms.
    pub const COUNT: usize = 4;

    /// All score terms, in discriminant order.
    pub const ALL: [ScoreTerm; Self::COUNT] = [
        Self::FixBoth,
        Self::FixDepth,
        Self::FixRate,
        Self::GoodContinue,
    ];

    /// Term label as used in the tuned model.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixBoth => "fix_both",
            Self::FixDepth => "fix_depth",
            Self::FixRate => "fix_rate",
            Self::GoodContinue => "good_continue",
        }
    }

    /// Membership function for this term.
    pub const fn mf(self) -> TriangularMf {
        match self {
            Self::FixBoth => tri(SCORE_FIX_BOTH),
            Self::FixDepth => tri(SCORE_FIX_DEPTH),
            Self::FixRate => tri(SCORE_FIX_RATE),
            Self::GoodContinue => tri(SCORE_GOOD_CONTINUE),
        }
    }
}

/// One inference rule: IF depth IS `depth` AND rate IS `rate` THEN score IS `then`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Depth antecedent.
    pub depth: DepthTerm,
    /// Rate antecedent.
    pub rate: RateTerm,
    /// Score consequent.
    pub then: ScoreTerm,
}

impl Rule {
    /// Builds a rule.
    pub const fn new(depth: DepthTerm, rate: RateTerm, then: ScoreTerm) -> Self {
        Self { depth, rate, then }
    }

    /// Firing strength at clamped inputs. AND is the min of the two
    /// antecedent memberships.
    pub fn strength(&self, depth_cm: f32, rate_cpm: f32) -> f32 {
        self.depth
            .membership(depth_cm)
            .min(self.rate.membership(rate_cpm))
    }
}

/// The fixed rule base: one rule per antecedent pair, nine in total.
pub const RULE_BASE: [Rule; 9] = [
    Rule::new(DepthTerm::TooShallow, RateTerm::TooSlow, ScoreTerm::FixBoth),
    Rule::new(DepthTerm::TooShallow, RateTerm::Ideal, ScoreTerm::FixDepth),
    Rule::new(DepthTerm::TooShallow, RateTerm::TooFast, ScoreTerm::FixBoth),
    Rule::new(DepthTerm::Adequate, RateTerm::TooSlow, ScoreTerm::FixRate),
    Rule::new(DepthTerm::Adequate, RateTerm::Ideal, ScoreTerm::GoodContinue),
    Rule::new(DepthTerm::Adequate, RateTerm::TooFast, ScoreTerm::FixRate),
    Rule::new(DepthTerm::TooDeep, RateTerm::TooSlow, ScoreTerm::FixBoth),
    Rule::new(DepthTerm::TooDeep, RateTerm::Ideal, ScoreTerm::FixDepth),
    Rule::new(DepthTerm::TooDeep, RateTerm::TooFast, ScoreTerm::FixBoth),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_base_covers_every_antecedent_pair() {
        for depth in DepthTerm::ALL {
            for rate in RateTerm::ALL {
                let hits = RULE_BASE
                    .iter()
                    .filter(|r| r.depth == depth && r.rate == rate)
                    .count();
                assert_eq!(hits, 1, "pair ({}, {})", depth.name(), rate.name());
            }
        }
    }

    #[test]
    fn only_adequate_ideal_maps_to_good() {
        for rule in RULE_BASE {
            let good = rule.depth == DepthTerm::Adequate && rule.rate == RateTerm::Ideal;
            assert_eq!(rule.then == ScoreTerm::GoodContinue, good);
        }
    }

    #[test]
    fn strength_is_min_of_antecedents() {
        let rule = Rule::new(DepthTerm::TooShallow, RateTerm::Ideal, ScoreTerm::FixDepth);
        // too_shallow(2.0) = 0.6, ideal(110) = 1.0
        assert!((rule.strength(2.0, 110.0) - 0.6).abs() < 1e-6);
        // too_shallow(2.0) = 0.6, ideal(98) = 0.2
        assert!((rule.strength(2.0, 98.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn unrelated_antecedent_kills_the_rule() {
        let rule = Rule::new(DepthTerm::TooDeep, RateTerm::TooFast, ScoreTerm::FixBoth);
        assert_eq!(rule.strength(5.5, 110.0), 0.0);
    }

    #[test]
    fn term_names_match_tuned_model() {
        assert_eq!(DepthTerm::TooShallow.name(), "too_shallow");
        assert_eq!(RateTerm::Ideal.name(), "ideal");
        assert_eq!(ScoreTerm::GoodContinue.name(), "good_continue");
    }
}
