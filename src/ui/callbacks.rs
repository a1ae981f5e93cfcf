/// No-argument navigation hook supplied by the shell.
///
/// A screen's only coupling to the rest of the application. Every hook is
/// optional; screens never inspect what the hook does.
pub type NavCallback = Box<dyn FnMut() + Send>;

/// Invokes an optional hook. An absent hook is a tolerated no-op.
pub fn fire(slot: &mut Option<NavCallback>) {
    if let Some(callback) = slot.as_mut() {
        callback();
    }
}
