//! Sequencing module - Adaptive question ordering.

mod annotated;
mod sequencer;

pub use annotated::AnnotatedQuestion;
pub use sequencer::{assign_dynamic_priority, QuestionSequencer};
