//! OptimizationScorer - Single home of the benefit-scoring policy.

use tracing::warn;

use crate::domain::catalog::SourceRegistry;
use crate::domain::foundation::Percentage;
use crate::domain::rules::{SkipLogicEvaluator, SkipRule};
use crate::domain::session::{ConnectedSourceSet, ImportedDataBag};

use super::metrics::OptimizationMetrics;

/// Coverage never exceeds this, regardless of which sources are
/// connected: some share of the assessment always stays manual.
pub const COVERAGE_CAP_PERCENT: u8 = 95;

/// The combined score never exceeds this.
pub const TOTAL_SCORE_CAP: f64 = 90.0;

/// Weight of coverage relative to time saved in the combined score.
const COVERAGE_WEIGHT: f64 = 0.5;

/// Pure scorer over connected sources and imported data.
pub struct OptimizationScorer;

impl OptimizationScorer {
    /// Aggregates connected sources into optimization metrics.
    ///
    /// Coverage is a simple additive model: potentials of connected
    /// sources are summed up to the cap, so overlapping data types
    /// across sources are double-counted by design. The policy lives
    /// entirely in this function so it can be swapped without touching
    /// callers.
    ///
    /// Connected ids missing from the catalog contribute nothing and are
    /// reported via logs only.
    pub fn score(
        connected: &ConnectedSourceSet,
        imported: &ImportedDataBag,
        registry: &SourceRegistry,
        skip_rules: &[SkipRule],
    ) -> OptimizationMetrics {
        let mut connected_source_count = 0usize;
        let mut time_saved_min = 0u32;
        let mut potentials = Vec::with_capacity(connected.len());

        for id in connected.iter() {
            match registry.get_source(id) {
                Ok(source) => {
                    connected_source_count += 1;
                    time_saved_min += source.estimated_time_saved_min;
                    potentials.push(source.pre_population_potential);
                }
                Err(_) => {
                    warn!(source = %id, "connected source missing from catalog; contributes nothing");
                }
            }
        }

        let pre_population_coverage =
            Percentage::sum_capped(potentials, Percentage::new(COVERAGE_CAP_PERCENT));
        let skippable_question_count =
            SkipLogicEvaluator::skippable_from_imports(skip_rules, imported);
        let total_optimization_score = (f64::from(time_saved_min)
            + f64::from(pre_population_coverage.value()) * COVERAGE_WEIGHT)
            .min(TOTAL_SCORE_CAP);

        OptimizationMetrics {
            connected_source_count,
            time_saved_min,
            pre_population_coverage,
            skippable_question_count,
            total_optimization_score,
        }
    }
}
