//! QuestionSequencer - Adaptive filtering, annotation, and ordering.

use crate::domain::foundation::{DeclaredPriority, DynamicPriority};
use crate::domain::questions::Question;
use crate::domain::rules::{
    PrePopulationResolver, PrePopulationRule, SkipLogicEvaluator, SkipRule,
};
use crate::domain::session::{ImportedDataBag, ResponseSet};

use super::annotated::AnnotatedQuestion;

/// Composes skip evaluation, pre-population, and priority assignment
/// into the annotated list the presentation layer consumes.
pub struct QuestionSequencer;

impl QuestionSequencer {
    /// Transforms a raw question list into the annotated, ordered list.
    ///
    /// Every input question appears in the output: skipping is a flag,
    /// not a removal. Skipped questions sort after all others; ties in
    /// computed priority preserve raw-list order. The output is a total
    /// function of the four inputs.
    pub fn sequence(
        questions: &[Question],
        responses: &ResponseSet,
        imported: &ImportedDataBag,
        skip_rules: &[SkipRule],
        pre_population_rules: &[PrePopulationRule],
    ) -> Vec<AnnotatedQuestion> {
        let mut annotated: Vec<AnnotatedQuestion> = questions
            .iter()
            .map(|question| {
                let decision =
                    SkipLogicEvaluator::evaluate(&question.id, responses, imported, skip_rules);
                let pre_population = if decision.should_skip {
                    None
                } else {
                    PrePopulationResolver::resolve(&question.id, imported, pre_population_rules)
                };
                let dynamic_priority =
                    assign_dynamic_priority(question, decision.should_skip, responses);
                AnnotatedQuestion {
                    question: question.clone(),
                    should_skip: decision.should_skip,
                    skip_reason: decision.reason,
                    pre_population,
                    dynamic_priority,
                }
            })
            .collect();

        // Stable sort: equal keys keep raw-list order.
        annotated.sort_by_key(|a| (a.should_skip, a.dynamic_priority.level()));
        annotated
    }
}

/// Computes the dynamic priority of one question.
///
/// Skipping overrides everything. A declared Critical stays Critical. A
/// question declared below High whose dependencies all have recorded
/// responses is promoted to High; a question with no dependencies keeps
/// its declared priority.
pub fn assign_dynamic_priority(
    question: &Question,
    should_skip: bool,
    responses: &ResponseSet,
) -> DynamicPriority {
    if should_skip {
        return DynamicPriority::Skipped;
    }
    if question.declared_priority == DeclaredPriority::Critical {
        return DynamicPriority::Critical;
    }
    let dependencies_satisfied = !question.dependencies.is_empty()
        && question.dependencies.iter().all(|dep| responses.contains(dep));
    if dependencies_satisfied && question.declared_priority.level() > DeclaredPriority::High.level()
    {
        return DynamicPriority::High;
    }
    question.declared_priority.into()
}
