//! Model-View-Intent primitives for dialog state.
//!
//! Unidirectional flow: an intent goes through a pure reducer which
//! produces the next state; the view only ever reads state.

/// Marker for immutable UI state snapshots.
pub trait UiState: Default {}

/// Marker for user actions and system events feeding a reducer.
pub trait Intent {}

/// Pure state transition: no I/O, no clocks, fully unit-testable.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
