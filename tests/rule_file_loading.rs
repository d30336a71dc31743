//! Loading rule registries from YAML documents on disk.

use std::fs;

use tempfile::tempdir;

use venture_compass::config::RuleValidationPolicy;
use venture_compass::domain::questions::question_bank;
use venture_compass::domain::rules::{RuleError, RuleRegistry};

const RULE_DOCUMENT: &str = r#"
skip_rules:
  - target: idea_validation_experience
    conditions:
      - kind: response_equals
        question: business_idea_clarity
        value: no_idea
        reason: "No business idea to validate"
  - target: work_experience
    conditions:
      - kind: data_present
        path: linkedin.work_experience
        reason: "Work history already imported from LinkedIn"

pre_population_rules:
  - target: industry_experience
    source_path: linkedin.industry
    extractor:
      kind: field
      name: primary
    confidence: 0.85
  - target: competitor_awareness
    source_path: crunchbase.competitors
    extractor:
      kind: join_strings
      separator: ", "
    confidence: 0.7
"#;

#[test]
fn registry_loads_from_a_rule_file() {
    let dir = tempdir().unwrap();
    let rule_path = dir.path().join("rules.yaml");
    fs::write(&rule_path, RULE_DOCUMENT).unwrap();

    let contents = fs::read_to_string(&rule_path).unwrap();
    let registry = RuleRegistry::from_yaml_str(&contents).unwrap();

    assert_eq!(registry.skip_rules().len(), 2);
    assert_eq!(registry.pre_population_rules().len(), 2);
}

#[test]
fn loaded_registry_passes_strict_validation_against_the_bank() {
    let registry = RuleRegistry::from_yaml_str(RULE_DOCUMENT).unwrap();
    assert!(registry
        .validated(question_bank(), RuleValidationPolicy::Strict)
        .is_ok());
}

#[test]
fn file_with_unknown_question_fails_strict_but_loads_tolerant() {
    let document = r#"
skip_rules:
  - target: favorite_color
    conditions:
      - kind: data_present
        path: linkedin.industry
        reason: "nonsense"
  - target: work_experience
    conditions:
      - kind: data_present
        path: linkedin.work_experience
        reason: "Work history already imported from LinkedIn"
"#;
    let registry = RuleRegistry::from_yaml_str(document).unwrap();

    let strict = registry
        .clone()
        .validated(question_bank(), RuleValidationPolicy::Strict);
    assert!(matches!(
        strict,
        Err(RuleError::UnknownQuestionReference { question }) if question.as_str() == "favorite_color"
    ));

    let tolerant = registry
        .validated(question_bank(), RuleValidationPolicy::Tolerant)
        .unwrap();
    assert_eq!(tolerant.skip_rules().len(), 1);
    assert_eq!(tolerant.skip_rules()[0].target.as_str(), "work_experience");
}

#[test]
fn malformed_document_reports_a_parse_error() {
    let result = RuleRegistry::from_yaml_str("skip_rules: {not: a list}");
    assert!(matches!(result, Err(RuleError::Parse(_))));
}

#[test]
fn empty_document_yields_an_empty_registry() {
    let dir = tempdir().unwrap();
    let rule_path = dir.path().join("rules.yaml");
    fs::write(&rule_path, "{}").unwrap();

    let contents = fs::read_to_string(&rule_path).unwrap();
    let registry = RuleRegistry::from_yaml_str(&contents).unwrap();
    assert!(registry.skip_rules().is_empty());
    assert!(registry.pre_population_rules().is_empty());
}
