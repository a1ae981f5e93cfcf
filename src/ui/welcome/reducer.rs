use crate::ui::mvi::Reducer;
use crate::ui::welcome::intent::WelcomeIntent;
use crate::ui::welcome::state::{WelcomeAction, WelcomeFocus};

pub struct WelcomeReducer;

impl Reducer for WelcomeReducer {
    type State = WelcomeFocus;
    type Intent = WelcomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WelcomeIntent::FocusNext => WelcomeFocus {
                action: match state.action {
                    WelcomeAction::GetStarted => WelcomeAction::LogIn,
                    WelcomeAction::LogIn => WelcomeAction::GetStarted,
                },
            },
        }
    }
}
