use crate::backend::SessionSnapshot;
use crate::ui::callbacks::NavCallback;
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Screen};
use crate::ui::onboarding::OnboardingScreen;
use crate::ui::probe::{ConnectivityStatus, ProbeIntent, ProbeReducer, ProbeState};
use crate::ui::splash::SplashScreen;
use crate::ui::theme::{ColorScheme, Theme};
use crate::ui::welcome::{WelcomeFocus, WelcomeScreen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::mpsc as async_mpsc;

/// Work the UI asks the async side to do.
#[derive(Debug)]
pub enum UiCommand {
    RunProbe,
}

pub type UiCommandSender = async_mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application shell: the external navigator of the screens.
///
/// Mounts exactly one screen at a time and wires each screen's optional
/// hooks to navigation intents. Screens never see each other.
pub struct App {
    should_quit: bool,
    theme: Theme,
    nav: NavState,
    splash: SplashScreen,
    onboarding: OnboardingScreen,
    welcome: WelcomeScreen,
    probe: ProbeState,
    session: SessionSnapshot,
    commands: Option<UiCommandSender>,
    nav_rx: Receiver<NavIntent>,
}

impl App {
    pub fn new(scheme: ColorScheme, session: SessionSnapshot) -> Self {
        let (nav_tx, nav_rx) = mpsc::channel();

        let onboarding = OnboardingScreen {
            on_skip: Some(nav_hook(&nav_tx, NavIntent::SkipPressed)),
            on_next: Some(nav_hook(&nav_tx, NavIntent::NextPressed)),
        };
        let welcome = WelcomeScreen {
            on_get_started: Some(nav_hook(&nav_tx, NavIntent::GetStartedPressed)),
            on_login: Some(nav_hook(&nav_tx, NavIntent::LogInPressed)),
            ..WelcomeScreen::default()
        };

        Self {
            should_quit: false,
            theme: Theme::resolve(scheme),
            nav: NavState::default(),
            splash: SplashScreen::mount(),
            onboarding,
            welcome,
            probe: ProbeState::default(),
            session,
            commands: None,
            nav_rx,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn splash(&self) -> &SplashScreen {
        &self.splash
    }

    pub fn welcome_focus(&self) -> WelcomeFocus {
        self.welcome.focus
    }

    pub fn probe(&self) -> &ProbeState {
        &self.probe
    }

    pub fn session(&self) -> &SessionSnapshot {
        &self.session
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let quit = matches!(key.code, KeyCode::Char('q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            self.should_quit = true;
            return;
        }

        match (self.nav.screen, key.code) {
            // Any key skips the splash.
            (Screen::Splash, _) => self.apply_nav(NavIntent::SplashFinished),
            (_, KeyCode::Char('d')) => self.apply_nav(NavIntent::DiagnosticsToggled),
            (Screen::Onboarding, KeyCode::Enter | KeyCode::Right | KeyCode::Char('n')) => {
                self.onboarding.press_next()
            }
            (Screen::Onboarding, KeyCode::Esc | KeyCode::Char('s')) => {
                self.onboarding.press_skip()
            }
            (Screen::Welcome, KeyCode::Tab | KeyCode::Left | KeyCode::Right) => {
                self.welcome.focus_next()
            }
            (Screen::Welcome, KeyCode::Enter) => self.welcome.activate(),
            (Screen::Diagnostics, KeyCode::Char('r')) => self.request_probe_retry(),
            (Screen::Diagnostics, KeyCode::Esc) => self.apply_nav(NavIntent::DiagnosticsToggled),
            _ => {}
        }

        self.drain_nav();
    }

    pub fn on_tick(&mut self) {
        if self.nav.screen == Screen::Splash {
            self.splash.on_tick();
            if self.splash.ready_to_advance() {
                self.apply_nav(NavIntent::SplashFinished);
            }
        }
    }

    pub fn on_probe_result(&mut self, status: ConnectivityStatus) {
        dispatch_mvi!(self, probe, ProbeReducer, ProbeIntent::Completed(status));
    }

    /// Applies intents queued by screen hooks.
    fn drain_nav(&mut self) {
        while let Ok(intent) = self.nav_rx.try_recv() {
            self.apply_nav(intent);
        }
    }

    fn apply_nav(&mut self, intent: NavIntent) {
        let before = self.nav.screen;
        dispatch_mvi!(self, nav, NavReducer, intent);
        let after = self.nav.screen;

        if before != after {
            self.on_screen_changed(before, after);
        }

        if let Some(choice) = self.nav.chosen_entry {
            tracing::info!(?choice, "entry action chosen, leaving the funnel");
            self.should_quit = true;
        }
    }

    fn on_screen_changed(&mut self, from: Screen, to: Screen) {
        tracing::debug!(?from, ?to, "screen changed");
        if from == Screen::Splash {
            // Unmount must cancel pending and running animation.
            self.splash.unmount();
        }
        if to == Screen::Diagnostics {
            self.launch_probe();
        }
    }

    /// Automatic probe on diagnostics mount. Probes are serialized: a
    /// remount while one is still awaiting the backend keeps the pending
    /// probe instead of stacking another.
    fn launch_probe(&mut self) {
        if self.probe.in_flight {
            tracing::debug!("diagnostics remounted; probe already in flight");
            return;
        }
        dispatch_mvi!(self, probe, ProbeReducer, ProbeIntent::Launched);
        self.send_command(UiCommand::RunProbe);
    }

    /// Manual retry; ignored while a probe is in flight.
    fn request_probe_retry(&mut self) {
        if self.probe.in_flight {
            tracing::debug!("probe retry ignored; one already in flight");
            return;
        }
        dispatch_mvi!(self, probe, ProbeReducer, ProbeIntent::RetryRequested);
        self.send_command(UiCommand::RunProbe);
    }

    fn send_command(&mut self, command: UiCommand) {
        if let Some(sender) = &self.commands {
            if let Err(err) = sender.try_send(command) {
                tracing::warn!(%err, "ui command channel unavailable");
            }
        }
    }
}

/// Builds a no-arg hook that forwards a navigation intent to the shell.
fn nav_hook(tx: &Sender<NavIntent>, intent: NavIntent) -> NavCallback {
    let tx = tx.clone();
    Box::new(move || {
        let _ = tx.send(intent);
    })
}
