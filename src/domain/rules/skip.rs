//! Skip-logic rules and their evaluator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{DataPath, QuestionId};
use crate::domain::questions::ResponseValue;
use crate::domain::session::{ImportedDataBag, ResponseSet};

/// One way a question can become skippable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipCondition {
    /// Fires when a previously answered question equals a specific value.
    ResponseEquals {
        question: QuestionId,
        value: ResponseValue,
        reason: String,
    },
    /// Fires when imported data already covers what the question asks for.
    DataPresent { path: DataPath, reason: String },
}

impl SkipCondition {
    /// Returns the human-readable reason reported when this condition fires.
    pub fn reason(&self) -> &str {
        match self {
            SkipCondition::ResponseEquals { reason, .. } => reason,
            SkipCondition::DataPresent { reason, .. } => reason,
        }
    }

    fn matches(&self, responses: &ResponseSet, imported: &ImportedDataBag) -> bool {
        match self {
            SkipCondition::ResponseEquals { question, value, .. } => {
                responses.get(question) == Some(value)
            }
            SkipCondition::DataPresent { path, .. } => imported.contains(path),
        }
    }
}

/// Declarative skip rule for one target question.
///
/// The rule fires if ANY of its conditions matches (logical OR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipRule {
    pub target: QuestionId,
    pub conditions: Vec<SkipCondition>,
}

impl SkipRule {
    /// Creates a skip rule.
    pub fn new(target: QuestionId, conditions: Vec<SkipCondition>) -> Self {
        Self { target, conditions }
    }
}

/// Outcome of a skip evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipDecision {
    pub should_skip: bool,
    pub reason: Option<String>,
}

impl SkipDecision {
    /// The question stays in the active sequence.
    pub fn keep() -> Self {
        Self {
            should_skip: false,
            reason: None,
        }
    }

    /// The question is skipped for the given reason.
    pub fn skip(reason: impl Into<String>) -> Self {
        Self {
            should_skip: true,
            reason: Some(reason.into()),
        }
    }
}

/// Stateless, idempotent skip evaluator.
///
/// Re-running on identical inputs always yields identical output; the
/// presentation layer re-evaluates on every response change.
pub struct SkipLogicEvaluator;

impl SkipLogicEvaluator {
    /// Decides whether a question should be hidden from the active sequence.
    ///
    /// Conditions are checked in declared order across the rules targeting
    /// the question; the first match supplies the reason and evaluation
    /// short-circuits. A question no rule targets is never skipped.
    pub fn evaluate(
        question_id: &QuestionId,
        responses: &ResponseSet,
        imported: &ImportedDataBag,
        rules: &[SkipRule],
    ) -> SkipDecision {
        for rule in rules.iter().filter(|r| &r.target == question_id) {
            for condition in &rule.conditions {
                if condition.matches(responses, imported) {
                    return SkipDecision::skip(condition.reason());
                }
            }
        }
        SkipDecision::keep()
    }

    /// Counts distinct rule targets that fire on imported data alone.
    ///
    /// Runs the same evaluation as [`Self::evaluate`] with an empty
    /// response set, so only data-presence conditions can match.
    pub fn skippable_from_imports(rules: &[SkipRule], imported: &ImportedDataBag) -> usize {
        let no_responses = ResponseSet::new();
        let mut targets: BTreeSet<&QuestionId> = BTreeSet::new();
        for rule in rules {
            if targets.contains(&rule.target) {
                continue;
            }
            if Self::evaluate(&rule.target, &no_responses, imported, rules).should_skip {
                targets.insert(&rule.target);
            }
        }
        targets.len()
    }
}
