//! Error types for rule loading and validation.

use thiserror::Error;

use crate::domain::foundation::QuestionId;

/// Errors raised while loading or validating rule definitions.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Failed to parse rule definitions: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Rule references unknown question '{question}'")]
    UnknownQuestionReference { question: QuestionId },
}
