//! Membership primitives: universes and triangular functions.
//!
//! ## Universe clamping
//!
//! Crisp inputs are clamped into the variable universe once, before any
//! membership is evaluated. Clamping is the whole input-validation story:
//! out-of-domain readings saturate at the nearest bound and non-finite
//! readings saturate deterministically (NaN and negative infinity to the
//! lower bound, positive infinity to the upper), so inference never fails
//! and never propagates NaN.
//!
//! ## Triangular membership
//!
//! Terms are triangles `(a, b, c)` with `a <= b <= c`:
//!
//! ```text
//! 1.0          b
//!             /|\
//!            / | \
//!           /  |  \
//! 0.0 ____a____|___c____
//! ```
//!
//! Shoulder terms degenerate one edge (`a == b` or `b == c`). Membership
//! at `x == b` is defined as 1.0, which keeps shoulder plateaus at full
//! membership on their flat endpoint, the conventional `trimf`
//! definition the term tables were tuned under.

/// Closed interval of valid crisp values for one linguistic variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Universe {
    lo: f32,
    hi: f32,
}

impl Universe {
    /// Creates a universe spanning `[lo, hi]`. Callers order `lo <= hi`.
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Lower bound.
    pub const fn lo(&self) -> f32 {
        self.lo
    }

    /// Upper bound.
    pub const fn hi(&self) -> f32 {
        self.hi
    }

    /// Clamps `x` into the universe.
    ///
    /// Built from a max/min chain rather than `f32::clamp` so NaN lands
    /// on the lower bound instead of propagating.
    pub fn clamp(&self, x: f32) -> f32 {
        x.max(self.lo).min(self.hi)
    }
}

/// Triangular membership function with vertices `a <= b <= c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularMf {
    a: f32,
    b: f32,
    c: f32,
}

impl TriangularMf {
    /// Creates a triangle from its vertices. Callers order `a <= b <= c`.
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Membership degree of `x`, in [0, 1].
    ///
    /// `x == b` evaluates to 1.0 even when an adjacent edge is
    /// degenerate; everything outside `(a, c)` evaluates to 0.0.
    pub fn membership(&self, x: f32) -> f32 {
        if x == self.b {
            1.0
        } else if x > self.a && x < self.b {
            (x - self.a) / (self.b - self.a)
        } else if x > self.b && x < self.c {
            (self.c - x) / (self.c - self.b)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_passes_in_range_values() {
        let u = Universe::new(0.0, 150.0);
        assert_eq!(u.clamp(0.0), 0.0);
        assert_eq!(u.clamp(42.5), 42.5);
        assert_eq!(u.clamp(150.0), 150.0);
    }

    #[test]
    fn clamp_saturates_out_of_range_values() {
        let u = Universe::new(0.0, 9.0);
        assert_eq!(u.clamp(-1.0), 0.0);
        assert_eq!(u.clamp(12.3), 9.0);
    }

    #[test]
    fn clamp_saturates_non_finite_values() {
        let u = Universe::new(0.0, 9.0);
        assert_eq!(u.clamp(f32::NAN), 0.0);
        assert_eq!(u.clamp(f32::NEG_INFINITY), 0.0);
        assert_eq!(u.clamp(f32::INFINITY), 9.0);
    }

    #[test]
    fn triangle_peaks_at_b() {
        let mf = TriangularMf::new(4.0, 5.5, 7.0);
        assert_eq!(mf.membership(5.5), 1.0);
    }

    #[test]
    fn triangle_edges_and_outside_are_zero() {
        let mf = TriangularMf::new(4.0, 5.5, 7.0);
        assert_eq!(mf.membership(4.0), 0.0);
        assert_eq!(mf.membership(7.0), 0.0);
        assert_eq!(mf.membership(3.0), 0.0);
        assert_eq!(mf.membership(8.0), 0.0);
    }

    #[test]
    fn triangle_slopes_are_linear() {
        let mf = TriangularMf::new(4.0, 5.5, 7.0);
        assert!((mf.membership(4.75) - 0.5).abs() < 1e-6);
        assert!((mf.membership(6.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn left_shoulder_holds_full_membership_at_plateau_end() {
        let mf = TriangularMf::new(0.0, 0.0, 5.0);
        assert_eq!(mf.membership(0.0), 1.0);
        assert!((mf.membership(2.0) - 0.6).abs() < 1e-6);
        assert_eq!(mf.membership(5.0), 0.0);
    }

    #[test]
    fn right_shoulder_holds_full_membership_at_plateau_end() {
        let mf = TriangularMf::new(6.0, 9.0, 9.0);
        assert_eq!(mf.membership(9.0), 1.0);
        assert!((mf.membership(7.5) - 0.5).abs() < 1e-6);
        assert_eq!(mf.membership(6.0), 0.0);
    }
}
