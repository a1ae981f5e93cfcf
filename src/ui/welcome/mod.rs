mod intent;
mod reducer;
mod state;
mod view;

pub use intent::WelcomeIntent;
pub use reducer::WelcomeReducer;
pub use state::{WelcomeAction, WelcomeFocus};
pub use view::draw;

use crate::ui::callbacks::{fire, NavCallback};
use crate::ui::mvi::Reducer;

/// Welcome screen: fixed styling, two focusable entry actions.
#[derive(Default)]
pub struct WelcomeScreen {
    pub focus: WelcomeFocus,
    pub on_get_started: Option<NavCallback>,
    pub on_login: Option<NavCallback>,
}

impl WelcomeScreen {
    pub fn focus_next(&mut self) {
        self.focus = WelcomeReducer::reduce(self.focus, WelcomeIntent::FocusNext);
    }

    /// Fires the hook for whichever action is focused.
    pub fn activate(&mut self) {
        match self.focus.action {
            WelcomeAction::GetStarted => fire(&mut self.on_get_started),
            WelcomeAction::LogIn => fire(&mut self.on_login),
        }
    }
}
