//! RuleRegistry - The declarative skip and pre-population rule tables.
//!
//! All rules live here, decoupled from any rendering code, and are
//! loaded once at startup: either the built-in tables or a YAML
//! document with the same shape.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::warn;

use crate::config::RuleValidationPolicy;
use crate::domain::foundation::{Confidence, DataPath, QuestionId};
use crate::domain::questions::{Question, ResponseValue};

use super::errors::RuleError;
use super::prepopulation::{Extractor, PrePopulationRule};
use super::skip::{SkipCondition, SkipRule};

/// Holder of all skip and pre-population rules in registration order.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    skip_rules: Vec<SkipRule>,
    pre_population_rules: Vec<PrePopulationRule>,
}

/// On-disk shape of a rule document.
#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    skip_rules: Vec<SkipRule>,
    #[serde(default)]
    pre_population_rules: Vec<PrePopulationRule>,
}

impl RuleRegistry {
    /// Creates a registry from explicit rule lists.
    pub fn new(skip_rules: Vec<SkipRule>, pre_population_rules: Vec<PrePopulationRule>) -> Self {
        Self {
            skip_rules,
            pre_population_rules,
        }
    }

    /// Returns the built-in rule tables, constructed once at first use.
    pub fn builtin() -> &'static RuleRegistry {
        &DEFAULT_RULES
    }

    /// Parses a registry from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Parse`] on malformed YAML or unknown rule kinds.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleError> {
        let file: RuleFile = serde_yaml::from_str(yaml)?;
        Ok(Self::new(file.skip_rules, file.pre_population_rules))
    }

    /// Returns the skip rules in registration order.
    pub fn skip_rules(&self) -> &[SkipRule] {
        &self.skip_rules
    }

    /// Returns the pre-population rules in registration order.
    pub fn pre_population_rules(&self) -> &[PrePopulationRule] {
        &self.pre_population_rules
    }

    /// Checks every question reference against the given question list.
    ///
    /// Under [`RuleValidationPolicy::Strict`] the first unknown reference
    /// fails the whole registry; under [`RuleValidationPolicy::Tolerant`]
    /// offending rules are dropped with a warning and the rest survive.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownQuestionReference`] in strict mode only.
    pub fn validated(
        self,
        questions: &[Question],
        policy: RuleValidationPolicy,
    ) -> Result<Self, RuleError> {
        let known = |id: &QuestionId| questions.iter().any(|q| &q.id == id);

        let mut skip_rules = Vec::with_capacity(self.skip_rules.len());
        for rule in self.skip_rules {
            match Self::check_skip_rule(&rule, &known) {
                None => skip_rules.push(rule),
                Some(question) => match policy {
                    RuleValidationPolicy::Strict => {
                        return Err(RuleError::UnknownQuestionReference { question });
                    }
                    RuleValidationPolicy::Tolerant => {
                        warn!(target_question = %rule.target, unknown = %question,
                            "dropping skip rule with unknown question reference");
                    }
                },
            }
        }

        let mut pre_population_rules = Vec::with_capacity(self.pre_population_rules.len());
        for rule in self.pre_population_rules {
            if known(&rule.target) {
                pre_population_rules.push(rule);
            } else {
                match policy {
                    RuleValidationPolicy::Strict => {
                        return Err(RuleError::UnknownQuestionReference {
                            question: rule.target,
                        });
                    }
                    RuleValidationPolicy::Tolerant => {
                        warn!(target_question = %rule.target,
                            "dropping pre-population rule with unknown target");
                    }
                }
            }
        }

        Ok(Self::new(skip_rules, pre_population_rules))
    }

    /// Returns the first unknown question a skip rule references, if any.
    fn check_skip_rule(
        rule: &SkipRule,
        known: &impl Fn(&QuestionId) -> bool,
    ) -> Option<QuestionId> {
        if !known(&rule.target) {
            return Some(rule.target.clone());
        }
        for condition in &rule.conditions {
            if let SkipCondition::ResponseEquals { question, .. } = condition {
                if !known(question) {
                    return Some(question.clone());
                }
            }
        }
        None
    }
}

fn qid(id: &str) -> QuestionId {
    QuestionId::new(id).expect("builtin rule question ids are non-empty")
}

fn path(p: &str) -> DataPath {
    DataPath::new(p).expect("builtin rule paths are well-formed")
}

static DEFAULT_RULES: Lazy<RuleRegistry> = Lazy::new(|| {
    let skip_rules = vec![
        SkipRule::new(
            qid("idea_validation_experience"),
            vec![SkipCondition::ResponseEquals {
                question: qid("business_idea_clarity"),
                value: ResponseValue::text("no_idea"),
                reason: "No business idea to validate".to_string(),
            }],
        ),
        SkipRule::new(
            qid("market_size_estimate"),
            vec![SkipCondition::ResponseEquals {
                question: qid("business_idea_clarity"),
                value: ResponseValue::text("no_idea"),
                reason: "Market sizing needs a concrete idea".to_string(),
            }],
        ),
        SkipRule::new(
            qid("work_experience"),
            vec![
                SkipCondition::DataPresent {
                    path: path("linkedin.work_experience"),
                    reason: "Work history already imported from LinkedIn".to_string(),
                },
                SkipCondition::DataPresent {
                    path: path("resume_upload.work_experience"),
                    reason: "Work history already imported from your resume".to_string(),
                },
            ],
        ),
        SkipRule::new(
            qid("competitor_awareness"),
            vec![SkipCondition::DataPresent {
                path: path("crunchbase.competitors"),
                reason: "Competitor list already imported from Crunchbase".to_string(),
            }],
        ),
        SkipRule::new(
            qid("revenue_streams_existing"),
            vec![SkipCondition::DataPresent {
                path: path("quickbooks.revenue_streams"),
                reason: "Revenue streams already imported from QuickBooks".to_string(),
            }],
        ),
        SkipRule::new(
            qid("traffic_baseline"),
            vec![SkipCondition::DataPresent {
                path: path("google_analytics.traffic"),
                reason: "Traffic baseline already imported from Google Analytics".to_string(),
            }],
        ),
    ];

    let pre_population_rules = vec![
        PrePopulationRule::new(
            qid("industry_experience"),
            path("linkedin.industry"),
            Extractor::Field {
                name: "primary".to_string(),
            },
            Confidence::new(0.85),
        ),
        PrePopulationRule::new(
            qid("work_experience"),
            path("linkedin.work_experience"),
            Extractor::CollectField {
                field: "company".to_string(),
            },
            Confidence::new(0.9),
        ),
        PrePopulationRule::new(
            qid("skills_inventory"),
            path("linkedin.skills"),
            Extractor::Verbatim,
            Confidence::new(0.8),
        ),
        PrePopulationRule::new(
            qid("market_segment"),
            path("crunchbase.market_segment"),
            Extractor::Verbatim,
            Confidence::new(0.75),
        ),
        PrePopulationRule::new(
            qid("competitor_awareness"),
            path("crunchbase.competitors"),
            Extractor::JoinStrings {
                separator: ", ".to_string(),
            },
            Confidence::new(0.7),
        ),
        PrePopulationRule::new(
            qid("revenue_streams_existing"),
            path("quickbooks.revenue_streams"),
            Extractor::JoinStrings {
                separator: ", ".to_string(),
            },
            Confidence::new(0.9),
        ),
        PrePopulationRule::new(
            qid("monthly_burn_rate"),
            path("quickbooks.expenses"),
            Extractor::Field {
                name: "monthly_usd".to_string(),
            },
            Confidence::new(0.8),
        ),
        PrePopulationRule::new(
            qid("traffic_baseline"),
            path("google_analytics.traffic"),
            Extractor::Field {
                name: "monthly_visits".to_string(),
            },
            Confidence::new(0.65),
        ),
    ];

    RuleRegistry::new(skip_rules, pre_population_rules)
});
