use crate::ui::mvi::ScreenState;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WelcomeAction {
    #[default]
    GetStarted,
    LogIn,
}

/// Which of the two entry actions holds focus.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WelcomeFocus {
    pub action: WelcomeAction,
}

impl ScreenState for WelcomeFocus {}
