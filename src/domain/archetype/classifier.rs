//! ArchetypeClassifier - Derives a founder archetype from chosen options.

use serde::{Deserialize, Serialize};

use crate::domain::questions::{Question, ResponseValue};
use crate::domain::session::ResponseSet;

use super::founder::FounderArchetype;

/// Points tallied for a single archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeScore {
    pub archetype: FounderArchetype,
    pub points: u32,
}

/// Ranked archetype outcome of an assessment.
///
/// Recomputed from responses on demand; never stored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    scores: Vec<ArchetypeScore>,
}

impl ArchetypeProfile {
    /// Returns the scores, highest first. Ties keep archetype declaration order.
    pub fn scores(&self) -> &[ArchetypeScore] {
        &self.scores
    }

    /// Returns the leading archetype, or None when nothing scored.
    pub fn primary(&self) -> Option<FounderArchetype> {
        self.scores
            .first()
            .filter(|s| s.points > 0)
            .map(|s| s.archetype)
    }

    /// Returns the points tallied for one archetype.
    pub fn score_for(&self, archetype: FounderArchetype) -> u32 {
        self.scores
            .iter()
            .find(|s| s.archetype == archetype)
            .map(|s| s.points)
            .unwrap_or(0)
    }
}

/// Pure classifier over questions and recorded responses.
pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    /// Tallies the archetype implications of every chosen option.
    ///
    /// A multiple-choice response matches the option whose value equals the
    /// recorded text; a list response matches every contained option value.
    /// Responses that match no option contribute nothing.
    pub fn classify(questions: &[Question], responses: &ResponseSet) -> ArchetypeProfile {
        let mut points = [0u32; 4];

        for question in questions {
            let Some(response) = responses.get(&question.id) else {
                continue;
            };
            for option in &question.options {
                if !Self::response_selects(response, &option.value) {
                    continue;
                }
                for implication in &option.implications {
                    points[Self::tally_index(*implication)] += 1;
                }
            }
        }

        let mut scores: Vec<ArchetypeScore> = FounderArchetype::all()
            .iter()
            .map(|&archetype| ArchetypeScore {
                archetype,
                points: points[Self::tally_index(archetype)],
            })
            .collect();
        // Stable sort keeps declaration order between equal scores.
        scores.sort_by_key(|s| std::cmp::Reverse(s.points));

        ArchetypeProfile { scores }
    }

    fn response_selects(response: &ResponseValue, option_value: &str) -> bool {
        match response {
            ResponseValue::Text(text) => text == option_value,
            ResponseValue::Items(items) => items.iter().any(|item| item == option_value),
            ResponseValue::Number(_) => false,
        }
    }

    fn tally_index(archetype: FounderArchetype) -> usize {
        FounderArchetype::all()
            .iter()
            .position(|&a| a == archetype)
            .expect("All FounderArchetype variants must be in all()")
    }
}
