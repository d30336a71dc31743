//! Property tests for the engine's universally-quantified guarantees:
//! score caps, sequencing idempotence, sort stability, and the
//! skip-flag invariants.

use proptest::prelude::*;

use venture_compass::config::EngineConfig;
use venture_compass::domain::catalog::{simulated_import, SourceRegistry};
use venture_compass::domain::foundation::{DynamicPriority, SourceId};
use venture_compass::domain::questions::{question_bank, ResponseValue};
use venture_compass::domain::scoring::{COVERAGE_CAP_PERCENT, TOTAL_SCORE_CAP};
use venture_compass::domain::session::{ConnectedSourceSet, ImportedDataBag, ResponseSet};
use venture_compass::engine::AssessmentEngine;

fn engine() -> AssessmentEngine {
    AssessmentEngine::with_defaults(EngineConfig::default()).expect("builtin rules are valid")
}

fn builtin_source_ids() -> Vec<SourceId> {
    SourceRegistry::builtin()
        .list_sources()
        .iter()
        .map(|s| s.id.clone())
        .collect()
}

/// Any subset of the built-in catalog, as a connected-source set.
fn connected_subset() -> impl Strategy<Value = ConnectedSourceSet> {
    let ids = builtin_source_ids();
    let len = ids.len();
    proptest::sample::subsequence(ids, 0..=len)
        .prop_map(|subset| subset.into_iter().collect())
}

/// The imported data produced by connecting exactly the given subset.
fn imported_for(connected: &ConnectedSourceSet) -> ImportedDataBag {
    let mut bag = ImportedDataBag::new();
    for id in connected.iter() {
        if let Some(payload) = simulated_import(id) {
            bag.merge_source(id, payload);
        }
    }
    bag
}

/// Answers for an arbitrary subset of the bank: option questions get one
/// of their option values, everything else a scale-style number.
fn responses_subset() -> impl Strategy<Value = ResponseSet> {
    let bank_len = question_bank().len();
    proptest::collection::vec(proptest::option::of(0..4usize), bank_len).prop_map(|choices| {
        let mut responses = ResponseSet::new();
        for (question, choice) in question_bank().iter().zip(choices) {
            let Some(choice) = choice else { continue };
            let value = match question.options.get(choice % question.options.len().max(1)) {
                Some(option) => ResponseValue::text(option.value.clone()),
                None => ResponseValue::Number((choice as i64 % 10) + 1),
            };
            responses.record(question.id.clone(), value);
        }
        responses
    })
}

proptest! {
    #[test]
    fn coverage_and_total_score_never_exceed_their_caps(connected in connected_subset()) {
        let engine = engine();
        let metrics = engine.score(&connected, &imported_for(&connected));

        prop_assert!(metrics.pre_population_coverage.value() <= COVERAGE_CAP_PERCENT);
        prop_assert!(metrics.total_optimization_score <= TOTAL_SCORE_CAP);
    }

    #[test]
    fn scoring_is_deterministic(connected in connected_subset()) {
        let engine = engine();
        let imported = imported_for(&connected);
        prop_assert_eq!(
            engine.score(&connected, &imported),
            engine.score(&connected, &imported)
        );
    }

    #[test]
    fn sequencing_is_idempotent(
        connected in connected_subset(),
        responses in responses_subset(),
    ) {
        let engine = engine();
        let imported = imported_for(&connected);
        let questions = question_bank();

        let first = engine.sequence(questions, &responses, &imported);
        let second = engine.sequence(questions, &responses, &imported);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn skip_flag_invariants_hold_for_all_inputs(
        connected in connected_subset(),
        responses in responses_subset(),
    ) {
        let engine = engine();
        let imported = imported_for(&connected);
        let annotated = engine.sequence(question_bank(), &responses, &imported);

        // Skipping is a flag, not a removal.
        prop_assert_eq!(annotated.len(), question_bank().len());

        for entry in &annotated {
            prop_assert_eq!(entry.should_skip, entry.skip_reason.is_some());
            prop_assert_eq!(
                entry.should_skip,
                entry.dynamic_priority == DynamicPriority::Skipped
            );
            if entry.should_skip {
                prop_assert!(entry.pre_population.is_none());
            }
        }

        // Every skipped entry sorts after every non-skipped entry.
        if let Some(first_skipped) = annotated.iter().position(|a| a.should_skip) {
            prop_assert!(annotated[first_skipped..].iter().all(|a| a.should_skip));
        }
    }

    #[test]
    fn sort_is_stable_over_raw_declaration_order(
        connected in connected_subset(),
        responses in responses_subset(),
    ) {
        let engine = engine();
        let imported = imported_for(&connected);
        let annotated = engine.sequence(question_bank(), &responses, &imported);

        let raw_index = |entry: &venture_compass::domain::sequencing::AnnotatedQuestion| {
            question_bank()
                .iter()
                .position(|q| q.id == entry.question.id)
                .expect("sequenced question comes from the bank")
        };

        for pair in annotated.windows(2) {
            let left = (pair[0].should_skip, pair[0].dynamic_priority.level());
            let right = (pair[1].should_skip, pair[1].dynamic_priority.level());
            // Output is sorted by (skip, priority level)...
            prop_assert!(left <= right);
            // ...and equal keys keep raw-list order.
            if left == right {
                prop_assert!(raw_index(&pair[0]) < raw_index(&pair[1]));
            }
        }
    }

    #[test]
    fn unruled_questions_are_never_skipped(responses in responses_subset()) {
        let engine = engine();
        let ruled: Vec<&str> = engine
            .rules()
            .skip_rules()
            .iter()
            .map(|r| r.target.as_str())
            .collect();

        for question in question_bank() {
            if ruled.contains(&question.id.as_str()) {
                continue;
            }
            let decision =
                engine.evaluate(&question.id, &responses, &ImportedDataBag::new());
            prop_assert!(!decision.should_skip);
        }
    }
}
