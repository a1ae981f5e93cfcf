/// Read-only view of the ambient auth/session state.
///
/// Owned elsewhere; screens only display it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub email: Option<String>,
    pub has_session: bool,
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn describe(&self) -> String {
        if self.loading {
            return "Session: loading...".to_string();
        }
        match (&self.email, self.has_session) {
            (Some(email), true) => format!("Session: signed in as {email}"),
            (Some(email), false) => format!("Session: {email} (no active session)"),
            (None, true) => "Session: anonymous session".to_string(),
            (None, false) => "Session: none".to_string(),
        }
    }
}
