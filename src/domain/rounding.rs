//! Explicit rounding direction for quantization.

/// Rounding direction used when a value is re-quantized to whole ledger units.
///
/// Every division and every float-to-integer conversion in the crate names
/// its rounding explicitly.
///
/// # Examples
///
/// ```
/// use pegswap::domain::Rounding;
///
/// assert_eq!(Rounding::NearestAwayFromZero.apply(2.5), 3.0);
/// assert_eq!(Rounding::Down.apply(2.9), 2.0);
/// assert_eq!(Rounding::Up.apply(2.1), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor for non-negative values).
    Down,
    /// Round to the nearest integer, ties away from zero.
    NearestAwayFromZero,
}

impl Rounding {
    /// Applies this rounding to a float, returning an integral `f64`.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Up => value.ceil(),
            Self::Down => value.trunc(),
            Self::NearestAwayFromZero => value.round(),
        }
    }

    /// Returns a human-readable description of the rounding direction.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Up => "round towards positive infinity",
            Self::Down => "round towards zero",
            Self::NearestAwayFromZero => "round to nearest, ties away from zero",
        }
    }
}
