use crate::backend::SessionSnapshot;
use crate::ui::layout::centered_rect;
use crate::ui::probe::{ConnectivityStatus, ProbeState};
use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Renders the diagnostics panel: probe status, session snapshot, retry
/// hint.
pub fn draw(
    frame: &mut Frame<'_>,
    area: Rect,
    theme: &Theme,
    probe: &ProbeState,
    session: &SessionSnapshot,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );
    let panel = centered_rect(70, 50, area);
    frame.render_widget(Clear, panel);

    let (status_text, status_color) = match &probe.status {
        ConnectivityStatus::Testing => ("Testing backend connection...".to_string(), theme.accent),
        ConnectivityStatus::ConnectedOk => ("Connected".to_string(), theme.status_ok),
        ConnectivityStatus::ConnectedExpectedError(message) => (
            format!("Connected (backend says: {message})"),
            theme.status_ok,
        ),
        ConnectivityStatus::Failed(message) => {
            (format!("Unreachable: {message}"), theme.status_error)
        }
    };

    let lines = vec![
        Line::from(Span::styled(
            status_text,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            session.describe(),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            if probe.in_flight {
                "Probe in flight..."
            } else {
                "r: retry  ·  Esc: back"
            },
            Style::default().fg(theme.text_secondary),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Diagnostics ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent_glow))
                .style(Style::default().bg(theme.surface).fg(theme.text_primary)),
        ),
        panel,
    );
}
