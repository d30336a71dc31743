//! AssessmentEngine - The composed engine the presentation layer calls.
//!
//! An engine value is explicitly constructed from a source registry, a
//! rule registry, and a config; there is no process-wide singleton. All
//! operations are pure over their inputs: state (responses, connected
//! sources, imported data) is owned by the caller and supplied on each
//! call, so re-invocation with equal inputs always yields equal output.

use crate::config::EngineConfig;
use crate::domain::archetype::{ArchetypeClassifier, ArchetypeProfile};
use crate::domain::catalog::SourceRegistry;
use crate::domain::foundation::{AssessmentPhase, QuestionId};
use crate::domain::questions::{question_bank, questions_for_phase, Question};
use crate::domain::rules::{
    PrePopulationResolver, PrePopulationResult, RuleError, RuleRegistry, SkipDecision,
    SkipLogicEvaluator,
};
use crate::domain::scoring::{OptimizationMetrics, OptimizationScorer};
use crate::domain::sequencing::{AnnotatedQuestion, QuestionSequencer};
use crate::domain::session::{
    AssessmentSession, ConnectedSourceSet, ImportedDataBag, ResponseSet,
};

/// The adaptive question-processing engine.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    config: EngineConfig,
    sources: SourceRegistry,
    rules: RuleRegistry,
}

impl AssessmentEngine {
    /// Composes an engine from explicit parts.
    ///
    /// Rule references are checked against the question bank under the
    /// config's validation policy before the engine is usable.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownQuestionReference`] under the strict
    /// policy when a rule references a question the bank does not declare.
    pub fn new(
        config: EngineConfig,
        sources: SourceRegistry,
        rules: RuleRegistry,
    ) -> Result<Self, RuleError> {
        let rules = rules.validated(question_bank(), config.rule_validation_policy())?;
        Ok(Self {
            config,
            sources,
            rules,
        })
    }

    /// Composes an engine over the built-in catalog and rule tables.
    pub fn with_defaults(config: EngineConfig) -> Result<Self, RuleError> {
        Self::new(
            config,
            SourceRegistry::builtin().clone(),
            RuleRegistry::builtin().clone(),
        )
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the source catalog.
    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    /// Returns the validated rule registry.
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Transforms a raw question list into the annotated, ordered list
    /// the presentation layer renders.
    pub fn sequence(
        &self,
        questions: &[Question],
        responses: &ResponseSet,
        imported: &ImportedDataBag,
    ) -> Vec<AnnotatedQuestion> {
        QuestionSequencer::sequence(
            questions,
            responses,
            imported,
            self.rules.skip_rules(),
            self.rules.pre_population_rules(),
        )
    }

    /// Sequences one phase of the question bank against a session's state.
    pub fn sequence_phase(
        &self,
        phase: AssessmentPhase,
        session: &AssessmentSession,
    ) -> Vec<AnnotatedQuestion> {
        let questions: Vec<Question> = questions_for_phase(phase).into_iter().cloned().collect();
        self.sequence(&questions, session.responses(), session.imported_data())
    }

    /// Aggregates connected sources into optimization metrics.
    pub fn score(
        &self,
        connected: &ConnectedSourceSet,
        imported: &ImportedDataBag,
    ) -> OptimizationMetrics {
        OptimizationScorer::score(connected, imported, &self.sources, self.rules.skip_rules())
    }

    /// Attempts to pre-populate an answer for a question from imported data.
    pub fn resolve(
        &self,
        question_id: &QuestionId,
        imported: &ImportedDataBag,
    ) -> Option<PrePopulationResult> {
        PrePopulationResolver::resolve(question_id, imported, self.rules.pre_population_rules())
    }

    /// Decides whether a question should be hidden from the active sequence.
    pub fn evaluate(
        &self,
        question_id: &QuestionId,
        responses: &ResponseSet,
        imported: &ImportedDataBag,
    ) -> SkipDecision {
        SkipLogicEvaluator::evaluate(question_id, responses, imported, self.rules.skip_rules())
    }

    /// Classifies the founder archetype from the responses recorded so far.
    pub fn classify(&self, responses: &ResponseSet) -> ArchetypeProfile {
        ArchetypeClassifier::classify(question_bank(), responses)
    }
}
