//! Small numeric helpers shared across modules.

/// Rounds to two decimal places, half away from zero.
///
/// Uses `libm` so the same code path serves std and no_std builds.
pub(crate) fn round2(value: f32) -> f32 {
    libm::roundf(value * 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(2.345), 2.35);
        assert_eq!(round2(93.33333), 93.33);
        assert_eq!(round2(-1.005), -1.01);
        assert_eq!(round2(0.0), 0.0);
    }
}
