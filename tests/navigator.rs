use freshcart::ui::mvi::Reducer;
use freshcart::ui::nav::{EntryChoice, NavIntent, NavReducer, NavState, Screen};
use freshcart::ui::onboarding::PAGES;

#[test]
fn boot_mounts_the_splash() {
    assert_eq!(NavState::default().screen, Screen::Splash);
}

#[test]
fn splash_finished_moves_to_onboarding_page_zero() {
    let state = NavReducer::reduce(NavState::default(), NavIntent::SplashFinished);
    assert_eq!(state.screen, Screen::Onboarding);
    assert_eq!(state.onboarding_page, 0);
}

#[test]
fn splash_finished_elsewhere_is_a_noop() {
    let welcome = NavState {
        screen: Screen::Welcome,
        ..NavState::default()
    };
    assert_eq!(NavReducer::reduce(welcome, NavIntent::SplashFinished), welcome);
}

#[test]
fn next_walks_every_page_then_reaches_welcome() {
    let mut state = NavReducer::reduce(NavState::default(), NavIntent::SplashFinished);
    for expected_page in 1..PAGES.len() {
        state = NavReducer::reduce(state, NavIntent::NextPressed);
        assert_eq!(state.screen, Screen::Onboarding);
        assert_eq!(state.onboarding_page, expected_page);
    }
    state = NavReducer::reduce(state, NavIntent::NextPressed);
    assert_eq!(state.screen, Screen::Welcome);
}

#[test]
fn skip_jumps_straight_to_welcome() {
    let state = NavReducer::reduce(NavState::default(), NavIntent::SplashFinished);
    let state = NavReducer::reduce(state, NavIntent::SkipPressed);
    assert_eq!(state.screen, Screen::Welcome);
}

#[test]
fn entry_choices_only_land_on_the_welcome_screen() {
    let onboarding = NavState {
        screen: Screen::Onboarding,
        ..NavState::default()
    };
    let state = NavReducer::reduce(onboarding, NavIntent::GetStartedPressed);
    assert_eq!(state.chosen_entry, None);

    let welcome = NavState {
        screen: Screen::Welcome,
        ..NavState::default()
    };
    let started = NavReducer::reduce(welcome, NavIntent::GetStartedPressed);
    assert_eq!(started.chosen_entry, Some(EntryChoice::GetStarted));

    let logged_in = NavReducer::reduce(welcome, NavIntent::LogInPressed);
    assert_eq!(logged_in.chosen_entry, Some(EntryChoice::LogIn));
}

#[test]
fn diagnostics_toggles_and_resumes_the_previous_screen() {
    let welcome = NavState {
        screen: Screen::Welcome,
        ..NavState::default()
    };
    let diagnostics = NavReducer::reduce(welcome, NavIntent::DiagnosticsToggled);
    assert_eq!(diagnostics.screen, Screen::Diagnostics);
    assert_eq!(diagnostics.resume, Screen::Welcome);

    let back = NavReducer::reduce(diagnostics, NavIntent::DiagnosticsToggled);
    assert_eq!(back.screen, Screen::Welcome);
}

#[test]
fn splash_cannot_be_interrupted_by_diagnostics() {
    let state = NavReducer::reduce(NavState::default(), NavIntent::DiagnosticsToggled);
    assert_eq!(state.screen, Screen::Splash);
}
