use crate::ui::splash::{bar_extent, SplashFrame};
use crate::ui::theme::{blend, Theme};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

const LOGO: &[&str] = &[
    r" ___             _      ___            _   ",
    r"| __| _ _  ___  | |_   / __| __ _  _ _| |_ ",
    r"| _| | '_|/ -_) |   \ | (__ / _` || '_|  _|",
    r"|_|  |_|  \___| |_||_| \___|\__,_||_|  \__|",
];

const TITLE: &str = "Groceries in minutes";

/// Renders the splash frame: logo lockup fading and settling in, title
/// below it, and the sweeping progress indicator once ambient starts.
pub fn draw(frame: &mut Frame<'_>, area: Rect, theme: &Theme, splash: SplashFrame) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );
    if area.width < 4 || area.height < 6 {
        return;
    }

    let logo_color = blend(theme.background, theme.accent, splash.logo_opacity);
    let title_color = blend(theme.background, theme.text_primary, splash.title_opacity);

    // Scale maps to how much of the lockup is revealed.
    let revealed = ((LOGO.len() as f32) * splash.logo_scale.clamp(0.0, 1.0)).round() as usize;
    let mut lines: Vec<Line> = LOGO
        .iter()
        .take(revealed.max(1))
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(logo_color))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        TITLE,
        Style::default().fg(title_color).add_modifier(Modifier::BOLD),
    )));

    let content_height = lines.len() as u16 + 2;
    let top = area.y + area.height.saturating_sub(content_height) / 2;
    let content = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: content_height.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content,
    );

    if splash.ambient_active {
        let track_width = area.width.saturating_sub(8).min(40).max(4);
        let (offset, width) = bar_extent(splash.loop_progress, track_width);
        let trailing = track_width.saturating_sub(offset + width);
        let track_style = Style::default().fg(theme.accent_glow);
        let bar_line = Line::from(vec![
            Span::styled("─".repeat(offset as usize), track_style),
            Span::styled("━".repeat(width as usize), Style::default().fg(theme.accent)),
            Span::styled("─".repeat(trailing as usize), track_style),
        ]);
        let bar_area = Rect {
            x: area.x + (area.width.saturating_sub(track_width)) / 2,
            y: (content.y + content_height).min(area.y + area.height - 1),
            width: track_width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(bar_line), bar_area);
    }
}
