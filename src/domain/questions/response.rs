//! ResponseValue - A recorded answer to a question.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An answer value as recorded against a question.
///
/// Multiple-choice answers store the chosen option's value string as
/// `Text`; scale answers store `Number`; consolidated answers store the
/// selected values as `Items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Number(i64),
    Text(String),
    Items(Vec<String>),
}

impl ResponseValue {
    /// Creates a text response.
    pub fn text(value: impl Into<String>) -> Self {
        ResponseValue::Text(value.into())
    }

    /// Creates a list response.
    pub fn items<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResponseValue::Items(values.into_iter().map(Into::into).collect())
    }

    /// Returns the text content, if this is a text response.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Number(n) => write!(f, "{}", n),
            ResponseValue::Text(text) => write!(f, "{}", text),
            ResponseValue::Items(items) => write!(f, "{}", items.join(", ")),
        }
    }
}
