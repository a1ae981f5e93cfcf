use crate::ui::mvi::Reducer;
use crate::ui::probe::intent::ProbeIntent;
use crate::ui::probe::state::{ConnectivityStatus, ProbeState};

pub struct ProbeReducer;

impl Reducer for ProbeReducer {
    type State = ProbeState;
    type Intent = ProbeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProbeIntent::Launched => ProbeState {
                status: ConnectivityStatus::Testing,
                in_flight: true,
            },
            ProbeIntent::Completed(status) => ProbeState {
                status,
                in_flight: false,
            },
            // Retry always passes through Testing first, unless a probe is
            // already awaiting the backend.
            ProbeIntent::RetryRequested => {
                if state.in_flight {
                    state
                } else {
                    ProbeState {
                        status: ConnectivityStatus::Testing,
                        in_flight: true,
                    }
                }
            }
        }
    }
}
