use crate::ui::mvi::Intent;

#[derive(Clone, Copy, Debug)]
pub enum WelcomeIntent {
    /// Move focus to the other action.
    FocusNext,
}

impl Intent for WelcomeIntent {}
