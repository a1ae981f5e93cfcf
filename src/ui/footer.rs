use crate::ui::nav::Screen;
use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, theme: &Theme, screen: Screen, area: Rect) -> Paragraph<'static> {
        let hints = match screen {
            Screen::Splash => " any key: skip │ q: quit",
            Screen::Onboarding => " Enter: next │ s: skip │ d: diagnostics │ q: quit",
            Screen::Welcome => " Tab: focus │ Enter: choose │ d: diagnostics │ q: quit",
            Screen::Diagnostics => " r: retry │ Esc: back │ q: quit",
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(theme.text_secondary)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(theme.background))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent_glow)),
            )
    }
}
