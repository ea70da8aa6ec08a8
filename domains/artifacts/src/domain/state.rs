//! State machine for a single registration run
//!
//! Start → Found → Notifying, or
//! Start → Missing → Fetched → Saving → Notifying;
//! Notifying → Publishing → Done.
//! Every failure lands in its own terminal state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply {event} in state {from}")]
    InvalidTransition { from: String, event: String },

    #[error("Terminal state: {0} is a terminal state and cannot transition")]
    TerminalState(String),
}

/// Registration run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationState {
    Start,
    /// Local record exists
    Found,
    /// No local record; museum lookup pending
    Missing,
    Fetched,
    Saving,
    Notifying,
    Publishing,
    Done,
    NotFound,
    FetchFailed,
    /// Museum record did not map into the value model
    InvalidRecord,
    PersistenceFailed,
    NotifyFailed,
    PublishFailed,
}

impl RegistrationState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }

    /// Terminal states other than `Done`
    pub fn is_failure(&self) -> bool {
        self.is_terminal() && *self != Self::Done
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [RegistrationState] {
        match self {
            Self::Start => &[Self::Found, Self::Missing, Self::PersistenceFailed],
            Self::Found => &[Self::Notifying],
            Self::Missing => &[Self::Fetched, Self::NotFound, Self::FetchFailed],
            Self::Fetched => &[Self::Saving, Self::InvalidRecord],
            Self::Saving => &[Self::Notifying, Self::PersistenceFailed],
            Self::Notifying => &[Self::Publishing, Self::NotifyFailed],
            Self::Publishing => &[Self::Done, Self::PublishFailed],
            Self::Done
            | Self::NotFound
            | Self::FetchFailed
            | Self::InvalidRecord
            | Self::PersistenceFailed
            | Self::NotifyFailed
            | Self::PublishFailed => &[],
        }
    }
}

impl std::fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Found => "found",
            Self::Missing => "missing",
            Self::Fetched => "fetched",
            Self::Saving => "saving",
            Self::Notifying => "notifying",
            Self::Publishing => "publishing",
            Self::Done => "done",
            Self::NotFound => "not_found",
            Self::FetchFailed => "fetch_failed",
            Self::InvalidRecord => "invalid_record",
            Self::PersistenceFailed => "persistence_failed",
            Self::NotifyFailed => "notify_failed",
            Self::PublishFailed => "publish_failed",
        };
        f.write_str(name)
    }
}

/// Events that drive a registration run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegistrationEvent {
    LookupHit,
    LookupMiss,
    LookupError,
    FetchOk,
    FetchNotFound,
    FetchError,
    MapOk,
    MapError,
    SaveOk,
    SaveError,
    /// A stored record goes straight to notification
    Notify,
    NotifyOk,
    NotifyError,
    PublishOk,
    PublishError,
}

impl std::fmt::Display for RegistrationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LookupHit => "lookup_hit",
            Self::LookupMiss => "lookup_miss",
            Self::LookupError => "lookup_error",
            Self::FetchOk => "fetch_ok",
            Self::FetchNotFound => "fetch_not_found",
            Self::FetchError => "fetch_error",
            Self::MapOk => "map_ok",
            Self::MapError => "map_error",
            Self::SaveOk => "save_ok",
            Self::SaveError => "save_error",
            Self::Notify => "notify",
            Self::NotifyOk => "notify_ok",
            Self::NotifyError => "notify_error",
            Self::PublishOk => "publish_ok",
            Self::PublishError => "publish_error",
        };
        f.write_str(name)
    }
}

/// Registration state machine
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: RegistrationState,
        event: RegistrationEvent,
    ) -> Result<RegistrationState, StateError> {
        use RegistrationEvent as E;
        use RegistrationState as S;

        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (current, event) {
            (S::Start, E::LookupHit) => S::Found,
            (S::Start, E::LookupMiss) => S::Missing,
            (S::Start, E::LookupError) => S::PersistenceFailed,
            (S::Missing, E::FetchOk) => S::Fetched,
            (S::Missing, E::FetchNotFound) => S::NotFound,
            (S::Missing, E::FetchError) => S::FetchFailed,
            (S::Fetched, E::MapOk) => S::Saving,
            (S::Fetched, E::MapError) => S::InvalidRecord,
            (S::Saving, E::SaveOk) => S::Notifying,
            (S::Saving, E::SaveError) => S::PersistenceFailed,
            (S::Found, E::Notify) => S::Notifying,
            (S::Notifying, E::NotifyOk) => S::Publishing,
            (S::Notifying, E::NotifyError) => S::NotifyFailed,
            (S::Publishing, E::PublishOk) => S::Done,
            (S::Publishing, E::PublishError) => S::PublishFailed,
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: RegistrationState, event: &RegistrationEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RegistrationEvent as E;
    use RegistrationState as S;

    fn run(events: &[RegistrationEvent]) -> Result<RegistrationState, StateError> {
        events
            .iter()
            .try_fold(S::Start, |state, event| {
                RegistrationStateMachine::transition(state, *event)
            })
    }

    #[test]
    fn test_found_locally_path() {
        let end = run(&[E::LookupHit, E::Notify, E::NotifyOk, E::PublishOk]);
        assert_eq!(end, Ok(S::Done));
    }

    #[test]
    fn test_fetch_and_save_path() {
        let end = run(&[
            E::LookupMiss,
            E::FetchOk,
            E::MapOk,
            E::SaveOk,
            E::NotifyOk,
            E::PublishOk,
        ]);
        assert_eq!(end, Ok(S::Done));
    }

    #[test]
    fn test_failure_terminals() {
        assert_eq!(run(&[E::LookupError]), Ok(S::PersistenceFailed));
        assert_eq!(run(&[E::LookupMiss, E::FetchNotFound]), Ok(S::NotFound));
        assert_eq!(run(&[E::LookupMiss, E::FetchError]), Ok(S::FetchFailed));
        assert_eq!(
            run(&[E::LookupMiss, E::FetchOk, E::MapError]),
            Ok(S::InvalidRecord)
        );
        assert_eq!(
            run(&[E::LookupMiss, E::FetchOk, E::MapOk, E::SaveError]),
            Ok(S::PersistenceFailed)
        );
        assert_eq!(
            run(&[E::LookupHit, E::Notify, E::NotifyError]),
            Ok(S::NotifyFailed)
        );
        assert_eq!(
            run(&[E::LookupHit, E::Notify, E::NotifyOk, E::PublishError]),
            Ok(S::PublishFailed)
        );
    }

    #[test]
    fn test_found_record_skips_fetch() {
        let result = RegistrationStateMachine::transition(S::Found, E::FetchOk);
        assert!(matches!(result, Err(StateError::InvalidTransition { .. })));
    }

    #[test]
    fn test_cannot_notify_before_save() {
        assert!(!RegistrationStateMachine::can_transition(
            S::Fetched,
            &E::NotifyOk
        ));
        assert!(!RegistrationStateMachine::can_transition(S::Missing, &E::Notify));
    }

    #[test]
    fn test_terminal_states_reject_events() {
        for state in [S::Done, S::NotFound, S::NotifyFailed, S::PublishFailed] {
            let result = RegistrationStateMachine::transition(state, E::PublishOk);
            assert!(matches!(result, Err(StateError::TerminalState(_))));
        }
    }

    #[test]
    fn test_is_failure() {
        assert!(!S::Done.is_failure());
        assert!(!S::Notifying.is_failure());
        assert!(S::NotFound.is_failure());
        assert!(S::PersistenceFailed.is_failure());
    }

    #[test]
    fn test_valid_transitions_agree_with_transition() {
        assert_eq!(
            S::Start.valid_transitions(),
            &[S::Found, S::Missing, S::PersistenceFailed]
        );
        assert!(S::Done.valid_transitions().is_empty());
        assert_eq!(S::Found.valid_transitions(), &[S::Notifying]);
    }
}
