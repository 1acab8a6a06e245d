//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_echo::config::Config;
use counter_echo::ui::app::App;
use counter_echo::ui::input::handle_key;
use counter_echo::ui::render::draw;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use ratatui::Terminal;

pub fn make_app() -> App {
    App::new(&Config::default())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, key(code));
}

/// Types `text` one key press at a time into whatever has focus.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

/// Draws the app on an in-memory terminal and returns the screen, one
/// string per row.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    render_with_cursor(app, width, height).0
}

/// Like [`render_rows`], also returning where the terminal cursor was left.
pub fn render_with_cursor(app: &App, width: u16, height: u16) -> (Vec<String>, Position) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    let buffer = terminal.backend().buffer().clone();
    let area = buffer.area;
    let rows: Vec<String> = (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect();
    (rows, cursor)
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
