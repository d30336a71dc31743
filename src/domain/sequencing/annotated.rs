//! AnnotatedQuestion - A question plus everything derived for one pass.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DynamicPriority;
use crate::domain::questions::Question;
use crate::domain::rules::PrePopulationResult;

/// A question annotated with the outcome of one evaluation pass.
///
/// Annotations are derived copies, recomputed whenever responses or
/// imported data change; the underlying question is never mutated.
///
/// # Invariants
///
/// - `skip_reason` is Some exactly when `should_skip` is true
/// - `should_skip` implies `dynamic_priority == Skipped`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedQuestion {
    pub question: Question,
    pub should_skip: bool,
    pub skip_reason: Option<String>,
    pub pre_population: Option<PrePopulationResult>,
    pub dynamic_priority: DynamicPriority,
}

impl AnnotatedQuestion {
    /// Returns true if a pre-populated candidate answer is attached.
    pub fn is_pre_populated(&self) -> bool {
        self.pre_population.is_some()
    }
}
