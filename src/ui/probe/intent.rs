use crate::ui::mvi::Intent;
use crate::ui::probe::state::ConnectivityStatus;

#[derive(Clone, Debug)]
pub enum ProbeIntent {
    /// Screen mounted; the automatic probe is starting.
    Launched,
    /// A probe finished with the given classification.
    Completed(ConnectivityStatus),
    /// User asked for a manual retry.
    RetryRequested,
}

impl Intent for ProbeIntent {}
