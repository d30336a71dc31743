//! Session-specific error types.

use thiserror::Error;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::SourceId;

/// Errors raised by session mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// A connect referenced a source id absent from the catalog.
    #[error(transparent)]
    UnknownSource(#[from] CatalogError),

    /// A disconnect referenced a source that was never connected.
    #[error("Data source '{id}' is not connected")]
    NotConnected { id: SourceId },

    /// A phase advance was requested past the final phase.
    #[error("Assessment is already at the final phase")]
    AlreadyAtFinalPhase,
}
