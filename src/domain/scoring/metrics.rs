//! OptimizationMetrics - Aggregate benefit of connected sources.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Derived progress/benefit figures shown alongside the source catalog.
///
/// Recomputed on every call; never persisted independently of the
/// connected sources and imported data that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationMetrics {
    /// Connected sources found in the catalog.
    pub connected_source_count: usize,
    /// Total estimated minutes of manual input saved.
    pub time_saved_min: u32,
    /// Share of the assessment pre-populated by connected sources.
    pub pre_population_coverage: Percentage,
    /// Distinct questions whose skip rules fire on imported data alone.
    pub skippable_question_count: usize,
    /// Combined benefit score.
    pub total_optimization_score: f64,
}

impl OptimizationMetrics {
    /// Metrics for a session with nothing connected.
    pub fn zero() -> Self {
        Self {
            connected_source_count: 0,
            time_saved_min: 0,
            pre_population_coverage: Percentage::ZERO,
            skippable_question_count: 0,
            total_optimization_score: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_metrics_are_all_zero() {
        let metrics = OptimizationMetrics::zero();
        assert_eq!(metrics.connected_source_count, 0);
        assert_eq!(metrics.time_saved_min, 0);
        assert_eq!(metrics.pre_population_coverage, Percentage::ZERO);
        assert_eq!(metrics.skippable_question_count, 0);
        assert_eq!(metrics.total_optimization_score, 0.0);
    }

    #[test]
    fn serializes_round_trip() {
        let metrics = OptimizationMetrics {
            connected_source_count: 1,
            time_saved_min: 15,
            pre_population_coverage: Percentage::new(85),
            skippable_question_count: 2,
            total_optimization_score: 57.5,
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let back: OptimizationMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(metrics, back);
    }
}
