//! ImportedDataBag - Nested extracted data addressed by dotted paths.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{DataPath, SourceId};

/// Extracted data from connected sources, navigable by [`DataPath`].
///
/// The top-level key of every entry is the id of the source that supplied
/// it. Data accumulates per source (append-only) and is removed wholesale
/// for a source when it is disconnected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportedDataBag(Map<String, Value>);

impl ImportedDataBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag from a JSON object. Non-object values yield an empty bag.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Merges a source's payload under its id.
    ///
    /// Nested objects merge key-by-key so repeated imports accumulate;
    /// a non-object value for an existing key replaces it.
    pub fn merge_source(&mut self, source: &SourceId, payload: Value) {
        let slot = self
            .0
            .entry(source.as_str().to_string())
            .or_insert(Value::Object(Map::new()));
        merge_value(slot, payload);
    }

    /// Removes everything imported from a source.
    pub fn clear_source(&mut self, source: &SourceId) {
        self.0.remove(source.as_str());
    }

    /// Navigates to the value at a dotted path.
    ///
    /// Returns None when any segment is absent or the stored value is
    /// JSON null; absent data is the common case, not an error.
    pub fn lookup(&self, path: &DataPath) -> Option<&Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }

    /// Returns true if a non-null value exists at the path.
    pub fn contains(&self, path: &DataPath) -> bool {
        self.lookup(path).is_some()
    }

    /// Returns true if nothing has been imported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn merge_value(slot: &mut Value, incoming: Value) {
    match (slot, incoming) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match existing.get_mut(&key) {
                    Some(current) => merge_value(current, value),
                    None => {
                        existing.insert(key, value);
                    }
                }
            }
        }
        (slot, incoming) => *slot = incoming,
    }
}
