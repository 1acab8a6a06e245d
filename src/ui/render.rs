use crate::ui::alert::render_alert_dialog;
use crate::ui::app::{App, Button, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ALERT, DECREMENT, FOCUS_BORDER, GLOBAL_BORDER, INCREMENT, MUTED_TEXT, RESET, TEXT,
};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

const INPUT_LABEL: &str = "Test Input:";
const INPUT_PLACEHOLDER: &str = "Enter some text...";
const INPUT_MAX_WIDTH: u16 = 48;
const BUTTON_MIN_WIDTH: usize = 9;

const BUTTON_ROWS: [[Button; 2]; 2] = [
    [Button::Decrement, Button::Increment],
    [Button::Reset, Button::Alert],
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(), header);
    draw_body(frame, app, body);
    frame.render_widget(
        Footer::new(app.focus(), app.show_alert()).widget(footer),
        footer,
    );

    render_alert_dialog(frame, app.alert(), area);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let regions = body_regions(body);
    let projection = app.projection();

    let count = Paragraph::new(Line::from(Span::styled(
        format!("Count: {}", projection.count),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(count, regions.count);

    let buttons_focused = app.focus() == Focus::Buttons && !app.show_alert();
    for (row, area) in BUTTON_ROWS.iter().zip(regions.button_rows) {
        let line = button_row(row, app.selected_button(), buttons_focused);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    frame.render_widget(
        Paragraph::new(INPUT_LABEL)
            .style(Style::default().fg(TEXT))
            .alignment(Alignment::Center),
        regions.input_label,
    );

    let input_area = centered_rect_by_size(
        regions.input,
        INPUT_MAX_WIDTH.min(regions.input.width),
        regions.input.height,
    );
    let input_focused = app.focus() == Focus::Input && !app.show_alert();
    let border = if input_focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(input_area);

    // One column stays free for the cursor.
    let (visible, visible_width) =
        visible_tail(app.input(), inner.width.saturating_sub(1) as usize);
    let content = if app.input().is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(visible, Style::default().fg(TEXT))
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), input_area);

    if input_focused && inner.width > 0 && inner.height > 0 {
        let offset = u16::try_from(visible_width).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            inner.x + offset.min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }

    let echo = Paragraph::new(Line::from(Span::styled(
        projection.input_echo,
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(echo, regions.echo);
}

fn button_row(row: &[Button; 2], selected: Button, focused: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(3);
    for (idx, button) in row.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let mut style = Style::default()
            .fg(Color::White)
            .bg(button_color(*button))
            .add_modifier(Modifier::BOLD);
        if focused && *button == selected {
            style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(
            format!("{:^width$}", button.label(), width = BUTTON_MIN_WIDTH),
            style,
        ));
    }
    Line::from(spans)
}

fn button_color(button: Button) -> Color {
    match button {
        Button::Decrement => DECREMENT,
        Button::Increment => INCREMENT,
        Button::Reset => RESET,
        Button::Alert => ALERT,
    }
}

/// The longest suffix of `text` that fits in `max_width` terminal columns,
/// with its width. Wide characters (CJK, emoji) take two columns.
fn visible_tail(text: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }
    (&text[start..], width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_tail_keeps_end() {
        assert_eq!(visible_tail("hello", 10), ("hello", 5));
        assert_eq!(visible_tail("hello world", 5), ("world", 5));
        assert_eq!(visible_tail("héllo", 4), ("éllo", 4));
        assert_eq!(visible_tail("abc", 0), ("", 0));
    }

    #[test]
    fn visible_tail_counts_columns_not_chars() {
        assert_eq!(visible_tail("日本語", 6), ("日本語", 6));
        assert_eq!(visible_tail("日本語", 5), ("本語", 4));
        assert_eq!(visible_tail("a日b", 3), ("日b", 3));
        assert_eq!(visible_tail("日", 1), ("", 0));
    }

    #[test]
    fn button_rows_cover_every_button_once() {
        let mut seen: Vec<Button> = BUTTON_ROWS.iter().flatten().copied().collect();
        seen.dedup();
        assert_eq!(seen, Button::ALL.to_vec());
    }
}
