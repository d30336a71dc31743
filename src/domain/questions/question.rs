//! Question and QuestionOption definitions.

use serde::{Deserialize, Serialize};

use crate::domain::archetype::FounderArchetype;
use crate::domain::foundation::{AssessmentPhase, DeclaredPriority, QuestionId};

/// Input widget and answer shape of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Scale,
    Text,
    Textarea,
    Consolidated,
    PrePopulated,
}

/// One selectable option of a multiple-choice or consolidated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Stable value recorded as the response.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Archetypes this choice counts toward, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implications: Vec<FounderArchetype>,
}

impl QuestionOption {
    /// Creates an option with no archetype implications.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            implications: Vec::new(),
        }
    }

    /// Attaches archetype implications to the option.
    pub fn with_implications(
        mut self,
        implications: impl IntoIterator<Item = FounderArchetype>,
    ) -> Self {
        self.implications = implications.into_iter().collect();
        self
    }
}

/// A question as declared in the bank.
///
/// Questions are never mutated by the engine; every evaluation pass
/// produces annotated copies instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub phase: AssessmentPhase,
    pub text: String,
    pub question_type: QuestionType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    pub declared_priority: DeclaredPriority,
    /// Questions whose answers feed into this one. When all of them have
    /// recorded responses, the sequencer may boost this question's priority.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<QuestionId>,
}

impl Question {
    /// Creates an optional, medium-priority question with no options.
    pub fn new(
        id: QuestionId,
        phase: AssessmentPhase,
        text: impl Into<String>,
        question_type: QuestionType,
    ) -> Self {
        Self {
            id,
            phase,
            text: text.into(),
            question_type,
            required: false,
            options: Vec::new(),
            declared_priority: DeclaredPriority::Medium,
            dependencies: Vec::new(),
        }
    }

    /// Marks the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the selectable options.
    pub fn with_options(mut self, options: Vec<QuestionOption>) -> Self {
        self.options = options;
        self
    }

    /// Sets the declared priority.
    pub fn with_priority(mut self, priority: DeclaredPriority) -> Self {
        self.declared_priority = priority;
        self
    }

    /// Sets the dependency question ids.
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = QuestionId>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[test]
    fn new_defaults_to_optional_medium_priority() {
        let question = Question::new(
            qid("risk_tolerance"),
            AssessmentPhase::SelfDiscovery,
            "How comfortable are you with financial risk?",
            QuestionType::Scale,
        );
        assert!(!question.required);
        assert_eq!(question.declared_priority, DeclaredPriority::Medium);
        assert!(question.options.is_empty());
        assert!(question.dependencies.is_empty());
    }

    #[test]
    fn builder_methods_compose() {
        let question = Question::new(
            qid("motivation"),
            AssessmentPhase::SelfDiscovery,
            "What drives you to start a venture?",
            QuestionType::MultipleChoice,
        )
        .required()
        .with_priority(DeclaredPriority::Critical)
        .with_options(vec![QuestionOption::new("build_something_new", "Build")])
        .with_dependencies([qid("risk_tolerance")]);

        assert!(question.required);
        assert_eq!(question.declared_priority, DeclaredPriority::Critical);
        assert_eq!(question.options.len(), 1);
        assert_eq!(question.dependencies, vec![qid("risk_tolerance")]);
    }

    #[test]
    fn question_type_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&QuestionType::MultipleChoice).unwrap(),
            "\"multiple_choice\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionType::PrePopulated).unwrap(),
            "\"pre_populated\""
        );
    }

    #[test]
    fn option_implications_are_omitted_when_empty() {
        let option = QuestionOption::new("no_idea", "I don't have an idea yet");
        let json = serde_json::to_string(&option).unwrap();
        assert!(!json.contains("implications"));
    }

    #[test]
    fn question_serializes_round_trip() {
        let question = Question::new(
            qid("funding_approach"),
            AssessmentPhase::BusinessPillars,
            "How do you plan to fund the venture?",
            QuestionType::MultipleChoice,
        )
        .with_options(vec![QuestionOption::new("bootstrap", "Bootstrap")
            .with_implications([FounderArchetype::Operator])]);

        let json = serde_json::to_string(&question).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(question, back);
    }
}
