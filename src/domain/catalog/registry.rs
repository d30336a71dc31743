//! SourceRegistry - Read-only catalog of importable data sources.

use once_cell::sync::Lazy;

use crate::domain::foundation::{Percentage, SourceId};

use super::errors::CatalogError;
use super::source::DataSource;

/// Ordered, read-only catalog of the data sources the assessment can
/// import from.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<DataSource>,
}

impl SourceRegistry {
    /// Creates a registry from an ordered list of catalog entries.
    pub fn new(sources: Vec<DataSource>) -> Self {
        Self { sources }
    }

    /// Returns the built-in catalog, constructed once at first use.
    pub fn builtin() -> &'static SourceRegistry {
        &DEFAULT_CATALOG
    }

    /// Returns all sources in declaration order.
    pub fn list_sources(&self) -> &[DataSource] {
        &self.sources
    }

    /// Looks up a source by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SourceNotFound`] for unknown ids. Callers
    /// must treat this as a configuration error, not a user-facing one.
    pub fn get_source(&self, id: &SourceId) -> Result<&DataSource, CatalogError> {
        self.sources
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| CatalogError::SourceNotFound { id: id.clone() })
    }

    /// Returns true if the registry contains the given id.
    pub fn contains(&self, id: &SourceId) -> bool {
        self.sources.iter().any(|s| &s.id == id)
    }
}

fn source_id(id: &str) -> SourceId {
    SourceId::new(id).expect("builtin source ids are non-empty")
}

/// The built-in source catalog.
///
/// LinkedIn's potential and time-saved figures are load-bearing for the
/// optimization scorer; the remaining entries follow the same shape.
static DEFAULT_CATALOG: Lazy<SourceRegistry> = Lazy::new(|| {
    SourceRegistry::new(vec![
        DataSource::new(
            source_id("linkedin"),
            "LinkedIn",
            ["work_experience", "industry", "skills", "education"],
            Percentage::new(85),
            15,
        ),
        DataSource::new(
            source_id("resume_upload"),
            "Resume Upload",
            ["work_experience", "education", "skills"],
            Percentage::new(70),
            10,
        ),
        DataSource::new(
            source_id("crunchbase"),
            "Crunchbase",
            ["competitors", "funding_rounds", "market_segment"],
            Percentage::new(60),
            12,
        ),
        DataSource::new(
            source_id("quickbooks"),
            "QuickBooks",
            ["revenue_streams", "expenses", "customers"],
            Percentage::new(50),
            8,
        ),
        DataSource::new(
            source_id("google_analytics"),
            "Google Analytics",
            ["traffic", "audience", "conversion_rates"],
            Percentage::new(40),
            6,
        ),
    ])
});
