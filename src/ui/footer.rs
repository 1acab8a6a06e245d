use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUTTON_HINTS: &str =
    " ←/→: Select │ Enter: Press │ +/-: Count │ R: Reset │ A: Alert │ Tab: Type │ Ctrl+Q: Quit";
const INPUT_HINTS: &str = " Type to edit │ Backspace: Delete │ Ctrl+U: Clear │ Tab/Esc: Buttons";
const ALERT_HINTS: &str = " Enter/Esc/Space: Dismiss";

/// Key hints for the current mode, with the version on the right.
pub struct Footer {
    focus: Focus,
    alert_visible: bool,
}

impl Footer {
    pub fn new(focus: Focus, alert_visible: bool) -> Self {
        Self {
            focus,
            alert_visible,
        }
    }

    fn hints(&self) -> &'static str {
        if self.alert_visible {
            return ALERT_HINTS;
        }
        match self.focus {
            Focus::Buttons => BUTTON_HINTS,
            Focus::Input => INPUT_HINTS,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain arrows and box-drawing chars.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

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
