//! Error types for the data source catalog.

use thiserror::Error;

use crate::domain::foundation::SourceId;

/// Errors raised by catalog lookups.
///
/// An unknown source id is a configuration error on the caller's side,
/// never something to show the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Data source '{id}' is not registered in the catalog")]
    SourceNotFound { id: SourceId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_not_found_displays_id() {
        let err = CatalogError::SourceNotFound {
            id: SourceId::new("linkedin").unwrap(),
        };
        assert_eq!(
            format!("{}", err),
            "Data source 'linkedin' is not registered in the catalog"
        );
    }
}
