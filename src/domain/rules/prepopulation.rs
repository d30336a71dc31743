//! Pre-population rules, extractors, and the resolver.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{Confidence, DataPath, QuestionId};
use crate::domain::questions::ResponseValue;
use crate::domain::session::ImportedDataBag;

/// Failures while turning imported data into a response value.
///
/// Always swallowed by the resolver; pre-population is best-effort and
/// its failure is indistinguishable from having no data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractorError {
    #[error("expected {expected}, found {found}")]
    WrongShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value is null")]
    NullValue,

    #[error("object has no field '{field}'")]
    MissingField { field: String },
}

/// How to turn the JSON value at a rule's source path into an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Extractor {
    /// Use a scalar or string-list value as-is.
    Verbatim,
    /// Take one named field of an object, then use it verbatim.
    Field { name: String },
    /// Join a string list into a single text value.
    JoinStrings { separator: String },
    /// Collect one named field from every object in a list.
    CollectField { field: String },
}

impl Extractor {
    /// Applies the extractor to a resolved JSON value.
    pub fn apply(&self, value: &Value) -> Result<ResponseValue, ExtractorError> {
        match self {
            Extractor::Verbatim => convert_scalar(value),
            Extractor::Field { name } => {
                let object = value.as_object().ok_or(ExtractorError::WrongShape {
                    expected: "object",
                    found: value_kind(value),
                })?;
                let field = object
                    .get(name)
                    .ok_or_else(|| ExtractorError::MissingField {
                        field: name.clone(),
                    })?;
                convert_scalar(field)
            }
            Extractor::JoinStrings { separator } => {
                let items = string_list(value)?;
                Ok(ResponseValue::Text(items.join(separator)))
            }
            Extractor::CollectField { field } => {
                let entries = value.as_array().ok_or(ExtractorError::WrongShape {
                    expected: "list of objects",
                    found: value_kind(value),
                })?;
                let mut collected = Vec::with_capacity(entries.len());
                for entry in entries {
                    let object = entry.as_object().ok_or(ExtractorError::WrongShape {
                        expected: "list of objects",
                        found: value_kind(entry),
                    })?;
                    let item = object
                        .get(field)
                        .ok_or_else(|| ExtractorError::MissingField {
                            field: field.clone(),
                        })?;
                    let text = item.as_str().ok_or(ExtractorError::WrongShape {
                        expected: "string field",
                        found: value_kind(item),
                    })?;
                    collected.push(text.to_string());
                }
                Ok(ResponseValue::Items(collected))
            }
        }
    }
}

fn convert_scalar(value: &Value) -> Result<ResponseValue, ExtractorError> {
    match value {
        Value::String(text) => Ok(ResponseValue::Text(text.clone())),
        Value::Number(number) => number
            .as_i64()
            .map(ResponseValue::Number)
            .ok_or(ExtractorError::WrongShape {
                expected: "integer",
                found: "fractional number",
            }),
        Value::Array(_) => string_list(value).map(ResponseValue::Items),
        Value::Null => Err(ExtractorError::NullValue),
        other => Err(ExtractorError::WrongShape {
            expected: "string, integer, or string list",
            found: value_kind(other),
        }),
    }
}

fn string_list(value: &Value) -> Result<Vec<String>, ExtractorError> {
    let entries = value.as_array().ok_or(ExtractorError::WrongShape {
        expected: "string list",
        found: value_kind(value),
    })?;
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(String::from)
                .ok_or(ExtractorError::WrongShape {
                    expected: "string list",
                    found: value_kind(entry),
                })
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Declarative pre-population rule for one target question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrePopulationRule {
    pub target: QuestionId,
    pub source_path: DataPath,
    pub extractor: Extractor,
    pub confidence: Confidence,
}

impl PrePopulationRule {
    /// Creates a pre-population rule.
    pub fn new(
        target: QuestionId,
        source_path: DataPath,
        extractor: Extractor,
        confidence: Confidence,
    ) -> Self {
        Self {
            target,
            source_path,
            extractor,
            confidence,
        }
    }
}

/// A candidate answer produced from imported data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrePopulationResult {
    pub value: ResponseValue,
    pub confidence: Confidence,
    pub source_path: DataPath,
}

/// Pure, best-effort resolver from imported data to candidate answers.
pub struct PrePopulationResolver;

impl PrePopulationResolver {
    /// Attempts to pre-populate an answer for a question.
    ///
    /// Returns None when no rule targets the question or the rule's path
    /// is absent from the imported data; both are the expected case for
    /// unconnected sources, not errors. Extractor failures are logged at
    /// debug level and reported as None.
    ///
    /// When several rules target the same question, the last-registered
    /// one wins.
    pub fn resolve(
        question_id: &QuestionId,
        imported: &ImportedDataBag,
        rules: &[PrePopulationRule],
    ) -> Option<PrePopulationResult> {
        let rule = rules.iter().rev().find(|r| &r.target == question_id)?;
        let value = imported.lookup(&rule.source_path)?;
        match rule.extractor.apply(value) {
            Ok(value) => Some(PrePopulationResult {
                value,
                confidence: rule.confidence,
                source_path: rule.source_path.clone(),
            }),
            Err(error) => {
                debug!(
                    question = %question_id,
                    path = %rule.source_path,
                    %error,
                    "pre-population extractor failed; treating as no data"
                );
                None
            }
        }
    }
}
