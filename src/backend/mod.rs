mod client;
mod session;

pub use client::{BackendError, CountProbe, CountReply, HttpBackendClient};
pub use session::SessionSnapshot;
