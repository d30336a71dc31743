//! ConnectedSourceSet - Data sources the user has connected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::SourceId;

/// The set of source ids currently connected to the session.
///
/// Mutated only by explicit connect/disconnect actions; iteration order
/// is deterministic (sorted by id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectedSourceSet(BTreeSet<SourceId>);

impl ConnectedSourceSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source. Returns false if it was already connected.
    pub fn connect(&mut self, id: SourceId) -> bool {
        self.0.insert(id)
    }

    /// Removes a source. Returns false if it was not connected.
    pub fn disconnect(&mut self, id: &SourceId) -> bool {
        self.0.remove(id)
    }

    /// Returns true if the source is connected.
    pub fn contains(&self, id: &SourceId) -> bool {
        self.0.contains(id)
    }

    /// Returns the number of connected sources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no sources are connected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over connected source ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceId> {
        self.0.iter()
    }
}

impl FromIterator<SourceId> for ConnectedSourceSet {
    fn from_iter<T: IntoIterator<Item = SourceId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
