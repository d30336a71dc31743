//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Sums a sequence of percentages, clamping the total at `cap`.
    ///
    /// The intermediate sum is widened so totals above 255 do not wrap.
    pub fn sum_capped<I>(values: I, cap: Percentage) -> Self
    where
        I: IntoIterator<Item = Percentage>,
    {
        let total: u32 = values.into_iter().map(|p| u32::from(p.0)).sum();
        Self(total.min(u32::from(cap.0)) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(85).value(), 85);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_over_100() {
        assert!(Percentage::try_new(100).is_ok());
        let result = Percentage::try_new(120);
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 120);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn sum_capped_stays_below_cap() {
        let total = Percentage::sum_capped(
            [Percentage::new(85), Percentage::new(70), Percentage::new(60)],
            Percentage::new(95),
        );
        assert_eq!(total.value(), 95);
    }

    #[test]
    fn sum_capped_returns_exact_total_below_cap() {
        let total = Percentage::sum_capped(
            [Percentage::new(30), Percentage::new(40)],
            Percentage::new(95),
        );
        assert_eq!(total.value(), 70);
    }

    #[test]
    fn sum_capped_of_empty_is_zero() {
        let total = Percentage::sum_capped(std::iter::empty(), Percentage::new(95));
        assert_eq!(total, Percentage::ZERO);
    }

    #[test]
    fn as_fraction_converts_correctly() {
        assert!((Percentage::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
        assert!((Percentage::new(100).as_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(85)), "85%");
    }

    #[test]
    fn serializes_as_bare_number() {
        let pct = Percentage::new(42);
        assert_eq!(serde_json::to_string(&pct).unwrap(), "42");
        let back: Percentage = serde_json::from_str("42").unwrap();
        assert_eq!(back, pct);
    }
}
