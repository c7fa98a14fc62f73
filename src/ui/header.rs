use crate::ui::page::Page;
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: Page) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default()
            .fg(BRAND_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut spans = vec![
            Span::styled("  Northlight Studio", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, page) in Page::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ", text_style));
            }
            let style = if page == active { active_style } else { text_style };
            spans.push(Span::styled(format!("{} {}", idx + 1, page.title()), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
