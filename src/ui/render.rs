use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::nav::Screen;
use crate::ui::{onboarding, probe, splash, welcome};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let theme = app.theme();

    frame.render_widget(Header::new().widget(theme), header);
    frame.render_widget(Clear, body);

    match app.nav().screen {
        Screen::Splash => splash::draw(frame, body, theme, app.splash().frame()),
        Screen::Onboarding => onboarding::draw(frame, body, theme, app.nav().onboarding_page),
        Screen::Welcome => welcome::draw(frame, body, app.welcome_focus()),
        Screen::Diagnostics => probe::draw(frame, body, theme, app.probe(), app.session()),
    }

    frame.render_widget(
        Footer::new().widget(theme, app.nav().screen, footer),
        footer,
    );
}
