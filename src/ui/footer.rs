use crate::rotation::InputFocus;
use crate::ui::page::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
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

    pub fn hints(page: Page, focus: InputFocus) -> &'static str {
        match (page, focus) {
            (Page::Home, _) => {
                " ←/→: Slide │ Space: Pause │ Esc: Resume │ Tab: Carousel │ a: Autoplay │ f: Filter │ 1-4: Pages │ q: Quit"
            }
            (Page::Contact, InputFocus::TextInput) => {
                " Tab/↑↓: Field │ Ctrl+S: Send │ Esc: Leave form │ Ctrl+Q: Quit"
            }
            (Page::Contact, InputFocus::Page) => " Enter: Edit form │ 1-4: Pages │ q: Quit",
            _ => " 1-4: Pages │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect, page: Page, focus: InputFocus) -> Paragraph<'static> {
        let hints = Self::hints(page, focus);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
