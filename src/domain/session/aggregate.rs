//! AssessmentSession aggregate entity.
//!
//! The session owns all state the engine operates on: recorded responses,
//! connected sources, imported data, and the current phase. The engine
//! itself never holds any of this; it is supplied on each call.
//!
//! # Invariants
//!
//! - `connected_sources` changes only through connect/disconnect
//! - `imported_data` accumulates per source and is cleared for a source
//!   exactly when that source is disconnected

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{simulated_import, SourceRegistry};
use crate::domain::foundation::{
    AssessmentPhase, PhaseSequence, QuestionId, SessionId, SourceId, Timestamp,
};
use crate::domain::questions::ResponseValue;

use super::errors::SessionError;
use super::imported::ImportedDataBag;
use super::responses::ResponseSet;
use super::sources::ConnectedSourceSet;

/// A user's assessment in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    id: SessionId,
    current_phase: AssessmentPhase,
    responses: ResponseSet,
    connected_sources: ConnectedSourceSet,
    imported_data: ImportedDataBag,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Creates a fresh session at the first phase.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            current_phase: PhaseSequence::first(),
            responses: ResponseSet::new(),
            connected_sources: ConnectedSourceSet::new(),
            imported_data: ImportedDataBag::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the phase the user is currently working through.
    pub fn current_phase(&self) -> AssessmentPhase {
        self.current_phase
    }

    /// Returns the recorded responses.
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Returns the connected sources.
    pub fn connected_sources(&self) -> &ConnectedSourceSet {
        &self.connected_sources
    }

    /// Returns the imported data.
    pub fn imported_data(&self) -> &ImportedDataBag {
        &self.imported_data
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last mutated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an answer, replacing any prior answer to the same question.
    pub fn record_response(&mut self, question_id: QuestionId, value: ResponseValue) {
        self.responses.record(question_id, value);
        self.touch();
    }

    /// Connects a data source and merges its simulated import payload.
    ///
    /// Reconnecting an already-connected source merges its payload again,
    /// which is a no-op for identical payloads.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnknownSource`] if the id is not in the registry
    pub fn connect_source(
        &mut self,
        registry: &SourceRegistry,
        id: SourceId,
    ) -> Result<(), SessionError> {
        registry.get_source(&id)?;
        if let Some(payload) = simulated_import(&id) {
            self.imported_data.merge_source(&id, payload);
        }
        self.connected_sources.connect(id);
        self.touch();
        Ok(())
    }

    /// Disconnects a source and clears everything imported from it.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotConnected`] if the source was not connected
    pub fn disconnect_source(&mut self, id: &SourceId) -> Result<(), SessionError> {
        if !self.connected_sources.disconnect(id) {
            return Err(SessionError::NotConnected { id: id.clone() });
        }
        self.imported_data.clear_source(id);
        self.touch();
        Ok(())
    }

    /// Moves the session to the next phase.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyAtFinalPhase`] at the last phase
    pub fn advance_phase(&mut self) -> Result<AssessmentPhase, SessionError> {
        let next = PhaseSequence::next(self.current_phase)
            .ok_or(SessionError::AlreadyAtFinalPhase)?;
        self.current_phase = next;
        self.touch();
        Ok(next)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DataPath;

    fn sid(id: &str) -> SourceId {
        SourceId::new(id).unwrap()
    }

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    fn path(p: &str) -> DataPath {
        DataPath::new(p).unwrap()
    }

    #[test]
    fn new_session_starts_empty_at_first_phase() {
        let session = AssessmentSession::new(SessionId::new());
        assert_eq!(session.current_phase(), AssessmentPhase::SelfDiscovery);
        assert!(session.responses().is_empty());
        assert!(session.connected_sources().is_empty());
        assert!(session.imported_data().is_empty());
    }

    #[test]
    fn record_response_stores_answer() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.record_response(qid("risk_tolerance"), ResponseValue::Number(8));
        assert_eq!(
            session.responses().get(&qid("risk_tolerance")),
            Some(&ResponseValue::Number(8))
        );
    }

    #[test]
    fn connect_source_merges_simulated_payload() {
        let mut session = AssessmentSession::new(SessionId::new());
        session
            .connect_source(SourceRegistry::builtin(), sid("linkedin"))
            .unwrap();
        assert!(session.connected_sources().contains(&sid("linkedin")));
        assert!(session
            .imported_data()
            .contains(&path("linkedin.industry.primary")));
    }

    #[test]
    fn connect_source_rejects_unknown_id() {
        let mut session = AssessmentSession::new(SessionId::new());
        let result = session.connect_source(SourceRegistry::builtin(), sid("myspace"));
        assert!(matches!(result, Err(SessionError::UnknownSource(_))));
        assert!(session.connected_sources().is_empty());
    }

    #[test]
    fn disconnect_source_clears_its_imported_data() {
        let mut session = AssessmentSession::new(SessionId::new());
        let registry = SourceRegistry::builtin();
        session.connect_source(registry, sid("linkedin")).unwrap();
        session.connect_source(registry, sid("crunchbase")).unwrap();

        session.disconnect_source(&sid("linkedin")).unwrap();

        assert!(!session.connected_sources().contains(&sid("linkedin")));
        assert!(!session.imported_data().contains(&path("linkedin.skills")));
        assert!(session
            .imported_data()
            .contains(&path("crunchbase.competitors")));
    }

    #[test]
    fn disconnect_of_unconnected_source_fails() {
        let mut session = AssessmentSession::new(SessionId::new());
        let result = session.disconnect_source(&sid("linkedin"));
        assert_eq!(
            result,
            Err(SessionError::NotConnected { id: sid("linkedin") })
        );
    }

    #[test]
    fn advance_phase_walks_the_sequence() {
        let mut session = AssessmentSession::new(SessionId::new());
        assert_eq!(
            session.advance_phase().unwrap(),
            AssessmentPhase::IdeaDiscovery
        );
        assert_eq!(
            session.advance_phase().unwrap(),
            AssessmentPhase::MarketResearch
        );
    }

    #[test]
    fn advance_phase_fails_at_final_phase() {
        let mut session = AssessmentSession::new(SessionId::new());
        while !PhaseSequence::is_last(session.current_phase()) {
            session.advance_phase().unwrap();
        }
        assert_eq!(
            session.advance_phase(),
            Err(SessionError::AlreadyAtFinalPhase)
        );
    }

    #[test]
    fn session_serializes_round_trip() {
        let mut session = AssessmentSession::new(SessionId::new());
        session
            .connect_source(SourceRegistry::builtin(), sid("quickbooks"))
            .unwrap();
        session.record_response(qid("motivation"), ResponseValue::text("master_a_craft"));

        let json = serde_json::to_string(&session).unwrap();
        let back: AssessmentSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }
}
