use crate::ui::mvi::ScreenState;

/// Where the connectivity check currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectivityStatus {
    #[default]
    Testing,
    ConnectedOk,
    /// Backend answered but reported an application-level error. Treated
    /// as evidence of reachability, not failure.
    ConnectedExpectedError(String),
    /// No response was obtained at all.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeState {
    pub status: ConnectivityStatus,
    /// A probe is currently awaiting the backend. Retries are ignored
    /// while set, so the status field never races.
    pub in_flight: bool,
}

impl ScreenState for ProbeState {}
