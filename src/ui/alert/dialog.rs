//! Dialog rendering for the alert overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, POPUP_BORDER, TEXT};

use super::state::AlertDialogState;

const MIN_DIALOG_WIDTH: u16 = 30;

/// Render the alert on top of everything else. No-op when hidden.
pub fn render_alert_dialog(frame: &mut Frame<'_>, state: &AlertDialogState, area: Rect) {
    let Some(notification) = state.notification() else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}  ", notification.body),
            Style::default().fg(TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " OK ",
            Style::default()
                .fg(TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let title = format!(" {} ", notification.header);
    let content_width = lines
        .iter()
        .map(Line::width)
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let width = (content_width as u16).saturating_add(2).max(MIN_DIALOG_WIDTH);
    let height = (lines.len() as u16).saturating_add(2);
    let dialog_area = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, dialog_area);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}
