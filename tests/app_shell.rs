use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use freshcart::backend::SessionSnapshot;
use freshcart::ui::app::{App, UiCommand};
use freshcart::ui::nav::Screen;
use freshcart::ui::probe::ConnectivityStatus;
use freshcart::ui::theme::ColorScheme;
use tokio::sync::mpsc;

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn app_with_commands() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(ColorScheme::Dark, SessionSnapshot::default());
    let (tx, rx) = mpsc::channel(8);
    app.attach_commands(tx);
    (app, rx)
}

#[test]
fn opening_diagnostics_launches_exactly_one_probe() {
    let (mut app, mut rx) = app_with_commands();

    press(&mut app, KeyCode::Char(' ')); // any key leaves the splash
    assert_eq!(app.nav().screen, Screen::Onboarding);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.nav().screen, Screen::Diagnostics);
    assert!(app.probe().in_flight);
    assert_eq!(app.probe().status, ConnectivityStatus::Testing);

    assert!(matches!(rx.try_recv(), Ok(UiCommand::RunProbe)));
    assert!(rx.try_recv().is_err());
}

#[test]
fn remount_while_a_probe_is_in_flight_does_not_stack_another() {
    let (mut app, mut rx) = app_with_commands();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(rx.try_recv(), Ok(UiCommand::RunProbe)));

    // Leave and re-enter diagnostics before any result arrives.
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));

    assert!(app.probe().in_flight);
    assert!(rx.try_recv().is_err(), "remount must reuse the pending probe");

    // A retry in that window is ignored too.
    press(&mut app, KeyCode::Char('r'));
    assert!(rx.try_recv().is_err());
}

#[test]
fn remount_after_completion_launches_a_fresh_probe() {
    let (mut app, mut rx) = app_with_commands();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(rx.try_recv(), Ok(UiCommand::RunProbe)));

    app.on_probe_result(ConnectivityStatus::ConnectedOk);
    assert!(!app.probe().in_flight);
    assert_eq!(app.probe().status, ConnectivityStatus::ConnectedOk);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));

    assert!(app.probe().in_flight);
    assert_eq!(app.probe().status, ConnectivityStatus::Testing);
    assert!(matches!(rx.try_recv(), Ok(UiCommand::RunProbe)));
}
