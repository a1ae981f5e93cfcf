use crate::ui::welcome::{WelcomeAction, WelcomeFocus};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

// Fixed styling: the welcome screen does not branch on the theme.
const OVERLAY_BG: Color = Color::Rgb(0x0c, 0x1f, 0x12);
const TAGLINE: Color = Color::Rgb(0x7b, 0xd3, 0x92);
const HEADLINE: Color = Color::Rgb(0xf2, 0xf7, 0xf2);
const DESCRIPTION: Color = Color::Rgb(0xb0, 0xbf, 0xb4);
const BUTTON_BG: Color = Color::Rgb(0x35, 0xb5, 0x5a);
const BUTTON_FG: Color = Color::Rgb(0x08, 0x14, 0x0b);

/// Renders the welcome screen over its fixed overlay background.
pub fn draw(frame: &mut Frame<'_>, area: Rect, focus: WelcomeFocus) {
    frame.render_widget(Block::default().style(Style::default().bg(OVERLAY_BG)), area);

    let lines = vec![
        Line::from(Span::styled(
            "FRESH · FAST · LOCAL",
            Style::default().fg(TAGLINE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Groceries at your door",
            Style::default().fg(HEADLINE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Order from the stores you trust and get it delivered in minutes.",
            Style::default().fg(DESCRIPTION),
        )),
        Line::from(""),
        Line::from(vec![
            button("Get started", focus.action == WelcomeAction::GetStarted),
            Span::raw("   "),
            button("Log in", focus.action == WelcomeAction::LogIn),
        ]),
    ];

    let content_height = (lines.len() as u16).min(area.height);
    let top = area.y + area.height.saturating_sub(content_height) / 2;
    let content = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: content_height,
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let text = format!("[ {label} ]");
    if focused {
        Span::styled(
            text,
            Style::default()
                .fg(BUTTON_FG)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(DESCRIPTION))
    }
}
