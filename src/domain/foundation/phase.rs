//! AssessmentPhase enum and the canonical phase progression.
//!
//! The assessment walks through 5 phases. This module consolidates all
//! phase-ordering logic into a single location so navigation and
//! progress calculations never duplicate the order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 5 phases of the entrepreneurial self-assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPhase {
    SelfDiscovery,
    IdeaDiscovery,
    MarketResearch,
    BusinessPillars,
    PrototypeTesting,
}

impl AssessmentPhase {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssessmentPhase::SelfDiscovery => "Self Discovery",
            AssessmentPhase::IdeaDiscovery => "Idea Discovery",
            AssessmentPhase::MarketResearch => "Market Research",
            AssessmentPhase::BusinessPillars => "Business Pillars",
            AssessmentPhase::PrototypeTesting => "Prototype Testing",
        }
    }
}

impl fmt::Display for AssessmentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Central location for phase ordering logic.
pub struct PhaseSequence;

impl PhaseSequence {
    /// The canonical order of assessment phases.
    pub const ORDER: [AssessmentPhase; 5] = [
        AssessmentPhase::SelfDiscovery,
        AssessmentPhase::IdeaDiscovery,
        AssessmentPhase::MarketResearch,
        AssessmentPhase::BusinessPillars,
        AssessmentPhase::PrototypeTesting,
    ];

    /// Returns all phases in order.
    pub fn all() -> &'static [AssessmentPhase; 5] {
        &Self::ORDER
    }

    /// Returns the 0-based index of a phase in the sequence.
    #[inline]
    pub fn order_index(phase: AssessmentPhase) -> usize {
        Self::ORDER
            .iter()
            .position(|&p| p == phase)
            .expect("All AssessmentPhase variants must be in ORDER")
    }

    /// Returns the next phase in the sequence, or None if at the end.
    pub fn next(phase: AssessmentPhase) -> Option<AssessmentPhase> {
        let idx = Self::order_index(phase);
        Self::ORDER.get(idx + 1).copied()
    }

    /// Returns the previous phase in the sequence, or None if at the start.
    pub fn previous(phase: AssessmentPhase) -> Option<AssessmentPhase> {
        let idx = Self::order_index(phase);
        if idx > 0 {
            Self::ORDER.get(idx - 1).copied()
        } else {
            None
        }
    }

    /// Returns true if phase `a` comes before phase `b` in the sequence.
    pub fn is_before(a: AssessmentPhase, b: AssessmentPhase) -> bool {
        Self::order_index(a) < Self::order_index(b)
    }

    /// Returns the first phase in the sequence.
    pub fn first() -> AssessmentPhase {
        Self::ORDER[0]
    }

    /// Returns the last phase in the sequence.
    pub fn last() -> AssessmentPhase {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// Returns true if this is the last phase in the sequence.
    pub fn is_last(phase: AssessmentPhase) -> bool {
        phase == Self::last()
    }
}
