//! Priority levels for question sequencing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority declared statically on a question in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl DeclaredPriority {
    /// Returns the numeric level (lower sorts first).
    pub fn level(&self) -> u8 {
        match self {
            DeclaredPriority::Critical => 1,
            DeclaredPriority::High => 2,
            DeclaredPriority::Medium => 3,
            DeclaredPriority::Low => 4,
        }
    }

    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            DeclaredPriority::Critical => "Critical",
            DeclaredPriority::High => "High",
            DeclaredPriority::Medium => "Medium",
            DeclaredPriority::Low => "Low",
        }
    }
}

impl fmt::Display for DeclaredPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Priority computed for a question on each evaluation pass.
///
/// Identical to [`DeclaredPriority`] plus the `Skipped` level, which always
/// sorts after every non-skipped level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicPriority {
    Critical,
    High,
    Medium,
    Low,
    Skipped,
}

impl DynamicPriority {
    /// Returns the numeric level (lower sorts first).
    pub fn level(&self) -> u8 {
        match self {
            DynamicPriority::Critical => 1,
            DynamicPriority::High => 2,
            DynamicPriority::Medium => 3,
            DynamicPriority::Low => 4,
            DynamicPriority::Skipped => 5,
        }
    }

    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            DynamicPriority::Critical => "Critical",
            DynamicPriority::High => "High",
            DynamicPriority::Medium => "Medium",
            DynamicPriority::Low => "Low",
            DynamicPriority::Skipped => "Skipped",
        }
    }
}

impl From<DeclaredPriority> for DynamicPriority {
    fn from(declared: DeclaredPriority) -> Self {
        match declared {
            DeclaredPriority::Critical => DynamicPriority::Critical,
            DeclaredPriority::High => DynamicPriority::High,
            DeclaredPriority::Medium => DynamicPriority::Medium,
            DeclaredPriority::Low => DynamicPriority::Low,
        }
    }
}

impl fmt::Display for DynamicPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_levels_are_ordered() {
        assert!(DeclaredPriority::Critical.level() < DeclaredPriority::High.level());
        assert!(DeclaredPriority::High.level() < DeclaredPriority::Medium.level());
        assert!(DeclaredPriority::Medium.level() < DeclaredPriority::Low.level());
    }

    #[test]
    fn skipped_sorts_after_every_declared_level() {
        for declared in [
            DeclaredPriority::Critical,
            DeclaredPriority::High,
            DeclaredPriority::Medium,
            DeclaredPriority::Low,
        ] {
            assert!(DynamicPriority::Skipped.level() > DynamicPriority::from(declared).level());
        }
    }

    #[test]
    fn conversion_preserves_level() {
        assert_eq!(
            DynamicPriority::from(DeclaredPriority::Medium).level(),
            DeclaredPriority::Medium.level()
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&DynamicPriority::Skipped).unwrap(),
            "\"skipped\""
        );
        assert_eq!(
            serde_json::to_string(&DeclaredPriority::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn displays_label() {
        assert_eq!(format!("{}", DeclaredPriority::High), "High");
        assert_eq!(format!("{}", DynamicPriority::Skipped), "Skipped");
    }
}
