//! Dotted path into the imported-data bag (e.g. `linkedin.work_experience`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A validated dotted path addressing a value inside imported data.
///
/// The first segment is by convention the id of the source the data came
/// from; subsequent segments navigate the nested payload.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataPath(String);

impl DataPath {
    /// Creates a DataPath, returning error if empty or containing empty segments.
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        let path = path.into();
        if path.is_empty() {
            return Err(ValidationError::empty_field("data_path"));
        }
        if path.split('.').any(|segment| segment.is_empty()) {
            return Err(ValidationError::invalid_format(
                "data_path",
                "empty segment",
            ));
        }
        Ok(Self(path))
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the first segment (the source id by convention).
    pub fn root_segment(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Returns the full dotted path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DataPath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DataPath {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataPath> for String {
    fn from(path: DataPath) -> Self {
        path.0
    }
}
