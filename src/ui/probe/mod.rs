mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ProbeIntent;
pub use reducer::ProbeReducer;
pub use state::{ConnectivityStatus, ProbeState};
pub use view::draw;

use crate::backend::{CountProbe, CountReply};

/// Issues one bounded read through the injected backend capability and
/// classifies the outcome.
///
/// An application-level error on the success channel still proves the
/// network and auth plumbing works, so it maps to
/// [`ConnectivityStatus::ConnectedExpectedError`] rather than failure.
pub async fn run_probe<C: CountProbe>(client: &C, collection: &str) -> ConnectivityStatus {
    tracing::debug!(collection, "running connectivity probe");
    match client.count_one(collection).await {
        Ok(CountReply::Rows(count)) => {
            tracing::info!(count, "probe reached the backend");
            ConnectivityStatus::ConnectedOk
        }
        Ok(CountReply::Denied { message }) => {
            tracing::info!(%message, "probe reached the backend with an application error");
            ConnectivityStatus::ConnectedExpectedError(message)
        }
        Err(err) => {
            tracing::warn!(%err, "probe transport failure");
            ConnectivityStatus::Failed(err.to_string())
        }
    }
}
