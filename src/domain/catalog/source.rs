//! DataSource catalog entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{Percentage, SourceId};

/// An importable data source the user can connect to the assessment.
///
/// Catalog entries are immutable: created once at process start and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Stable identifier, referenced by the connected-source set.
    pub id: SourceId,
    /// Display name.
    pub name: String,
    /// Kinds of data the source can supply (e.g. `work_experience`).
    pub declared_data_types: BTreeSet<String>,
    /// Share of the assessment this source can pre-populate on its own.
    pub pre_population_potential: Percentage,
    /// Estimated minutes of manual input saved by connecting this source.
    pub estimated_time_saved_min: u32,
}

impl DataSource {
    /// Creates a catalog entry.
    pub fn new(
        id: SourceId,
        name: impl Into<String>,
        data_types: impl IntoIterator<Item = &'static str>,
        pre_population_potential: Percentage,
        estimated_time_saved_min: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            declared_data_types: data_types.into_iter().map(String::from).collect(),
            pre_population_potential,
            estimated_time_saved_min,
        }
    }

    /// Returns true if this source declares the given data type.
    pub fn provides(&self, data_type: &str) -> bool {
        self.declared_data_types.contains(data_type)
    }
}
