use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar.
pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let title_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        let line = Line::from(Span::styled(self.title, title_style));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
