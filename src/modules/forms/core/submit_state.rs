// Submission lifecycle of one form session.
//
// Idle -> Submitting -> (Succeeded | Failed) -> Idle
//
// Responsibilities
// - Fold lifecycle events into the current state, the same way events evolve an aggregate.
// - A resolved state returns to Idle on the next edit, or moves straight to Submitting
//   on the next submit. Starting while already Submitting is not guarded.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    Started,
    Succeeded,
    Failed,
    Edited,
}

pub fn evolve(state: SubmitState, event: SubmitEvent) -> SubmitState {
    match (state, event) {
        (_, SubmitEvent::Started) => SubmitState::Submitting,
        (SubmitState::Submitting, SubmitEvent::Succeeded) => SubmitState::Succeeded,
        (SubmitState::Submitting, SubmitEvent::Failed) => SubmitState::Failed,
        (SubmitState::Succeeded | SubmitState::Failed, SubmitEvent::Edited) => SubmitState::Idle,
        (state, _) => state,
    }
}
