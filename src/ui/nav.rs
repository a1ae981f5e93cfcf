//! The navigator: decides which screen is mounted.
//!
//! Screens never talk to each other; their hooks feed intents back here
//! and this reducer is the single place screen transitions are written.

use crate::ui::mvi::{Intent, Reducer, ScreenState};
use crate::ui::onboarding;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Screen {
    #[default]
    Splash,
    Onboarding,
    Welcome,
    Diagnostics,
}

/// Terminal action chosen on the welcome screen. Sign-up and login flows
/// live outside this funnel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryChoice {
    GetStarted,
    LogIn,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NavState {
    pub screen: Screen,
    pub onboarding_page: usize,
    /// Screen to return to when diagnostics closes.
    pub resume: Screen,
    pub chosen_entry: Option<EntryChoice>,
}

impl ScreenState for NavState {}

#[derive(Clone, Copy, Debug)]
pub enum NavIntent {
    SplashFinished,
    NextPressed,
    SkipPressed,
    GetStartedPressed,
    LogInPressed,
    DiagnosticsToggled,
}

impl Intent for NavIntent {}

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::SplashFinished => match state.screen {
                Screen::Splash => NavState {
                    screen: Screen::Onboarding,
                    onboarding_page: 0,
                    ..state
                },
                _ => state,
            },
            NavIntent::NextPressed => match state.screen {
                Screen::Onboarding => {
                    if state.onboarding_page + 1 < onboarding::PAGES.len() {
                        NavState {
                            onboarding_page: state.onboarding_page + 1,
                            ..state
                        }
                    } else {
                        NavState {
                            screen: Screen::Welcome,
                            ..state
                        }
                    }
                }
                _ => state,
            },
            NavIntent::SkipPressed => match state.screen {
                Screen::Onboarding => NavState {
                    screen: Screen::Welcome,
                    ..state
                },
                _ => state,
            },
            NavIntent::GetStartedPressed => match state.screen {
                Screen::Welcome => NavState {
                    chosen_entry: Some(EntryChoice::GetStarted),
                    ..state
                },
                _ => state,
            },
            NavIntent::LogInPressed => match state.screen {
                Screen::Welcome => NavState {
                    chosen_entry: Some(EntryChoice::LogIn),
                    ..state
                },
                _ => state,
            },
            NavIntent::DiagnosticsToggled => match state.screen {
                Screen::Diagnostics => NavState {
                    screen: state.resume,
                    ..state
                },
                // Splash is not interruptible except by finishing it.
                Screen::Splash => state,
                current => NavState {
                    screen: Screen::Diagnostics,
                    resume: current,
                    ..state
                },
            },
        }
    }
}
