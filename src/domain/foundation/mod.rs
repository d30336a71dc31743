//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Venture Compass domain.

mod confidence;
mod data_path;
mod errors;
mod ids;
mod percentage;
mod phase;
mod priority;
mod timestamp;

pub use confidence::Confidence;
pub use data_path::DataPath;
pub use errors::ValidationError;
pub use ids::{QuestionId, SessionId, SourceId};
pub use percentage::Percentage;
pub use phase::{AssessmentPhase, PhaseSequence};
pub use priority::{DeclaredPriority, DynamicPriority};
pub use timestamp::Timestamp;
