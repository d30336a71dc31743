//! FounderArchetype enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The founder archetypes the assessment classifies users into.
///
/// Declaration order is the deterministic tie-break used by the
/// classifier when two archetypes score equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FounderArchetype {
    Visionary,
    Builder,
    Analyst,
    Operator,
}

impl FounderArchetype {
    /// Returns all archetypes in declaration order.
    pub fn all() -> &'static [FounderArchetype] {
        &[
            FounderArchetype::Visionary,
            FounderArchetype::Builder,
            FounderArchetype::Analyst,
            FounderArchetype::Operator,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FounderArchetype::Visionary => "Visionary",
            FounderArchetype::Builder => "Builder",
            FounderArchetype::Analyst => "Analyst",
            FounderArchetype::Operator => "Operator",
        }
    }

    /// Returns a short description of how this archetype approaches a venture.
    pub fn description(&self) -> &'static str {
        match self {
            FounderArchetype::Visionary => {
                "Leads with a picture of how an industry should change and recruits others into it"
            }
            FounderArchetype::Builder => {
                "Starts from the product, validating by making and shipping things"
            }
            FounderArchetype::Analyst => {
                "Starts from evidence, sizing markets and testing assumptions before committing"
            }
            FounderArchetype::Operator => {
                "Starts from execution, optimizing revenue, process, and sustainable growth"
            }
        }
    }
}

impl fmt::Display for FounderArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
