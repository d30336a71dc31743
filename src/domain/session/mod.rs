//! Session module - State owned by the presentation layer.
//!
//! The session aggregates everything the engine's pure operations are
//! called with: recorded responses, connected sources, imported data,
//! and the current phase. It is fully serializable so the external
//! auto-save layer can persist it as-is.

mod aggregate;
mod errors;
mod imported;
mod responses;
mod sources;

pub use aggregate::AssessmentSession;
pub use errors::SessionError;
pub use imported::ImportedDataBag;
pub use responses::ResponseSet;
pub use sources::ConnectedSourceSet;
