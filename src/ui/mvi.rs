//! Unidirectional data-flow primitives for the screen layer.
//!
//! Screens keep their transient state in small value types. Intents name
//! the things that can happen to a screen; a reducer is the only place a
//! state transition is written down, as a pure `(State, Intent) -> State`
//! function the views never bypass.

/// Marker trait for screen state values.
pub trait ScreenState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events.
pub trait Intent: Send + 'static {}

/// Pure state transition for one screen.
pub trait Reducer {
    type State: ScreenState;
    type Intent: Intent;

    /// Consumes the current state and an intent, returns the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
