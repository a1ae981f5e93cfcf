use crate::ui::onboarding::PAGES;
use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Renders one onboarding page: hero, headline, body, page dots and the
/// two action hints. All colors come from the resolved theme snapshot.
pub fn draw(frame: &mut Frame<'_>, area: Rect, theme: &Theme, page_index: usize) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );
    let page = match PAGES.get(page_index) {
        Some(page) => page,
        None => return,
    };

    let mut lines: Vec<Line> = Vec::new();
    for row in page.hero {
        lines.push(Line::from(Span::styled(
            *row,
            Style::default().fg(theme.accent),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        page.headline,
        Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        page.body,
        Style::default().fg(theme.text_secondary),
    )));
    lines.push(Line::from(""));
    lines.push(dots_line(theme, page_index));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[ Skip ]", Style::default().fg(theme.text_secondary)),
        Span::raw("   "),
        Span::styled(
            if page_index + 1 == PAGES.len() {
                "[ Get going ]"
            } else {
                "[ Next ]"
            },
            Style::default()
                .fg(theme.button_fg)
                .bg(theme.button_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

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

fn dots_line(theme: &Theme, page_index: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for i in 0..PAGES.len() {
        let (glyph, color) = if i == page_index {
            ("●", theme.dot_active)
        } else {
            ("○", theme.dot_inactive)
        };
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(glyph, Style::default().fg(color)));
    }
    Line::from(spans)
}
