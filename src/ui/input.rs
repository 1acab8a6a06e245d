use crate::ui::app::{App, Button, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The alert is modal: only acknowledgement gets through.
    if app.show_alert() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return;
    }

    match app.focus() {
        Focus::Buttons => handle_buttons_key(app, key),
        Focus::Input => handle_input_key(app, key),
    }
}

fn handle_buttons_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Shortcuts are plain or shifted letters only.
        KeyCode::Char(_) if has_command_modifier(key) => {}
        KeyCode::Left => app.move_selection(-1),
        KeyCode::Right => app.move_selection(1),
        KeyCode::Up => app.move_selection(-2),
        KeyCode::Down => app.move_selection(2),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_selected(),
        KeyCode::Tab | KeyCode::Char('i' | 'I') => app.focus_input(),
        KeyCode::Char('+' | '=') => app.press(Button::Increment),
        KeyCode::Char('-') => app.press(Button::Decrement),
        KeyCode::Char('r' | 'R') => app.press(Button::Reset),
        KeyCode::Char('a' | 'A') => app.press(Button::Alert),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_input();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Esc | KeyCode::Enter => app.focus_buttons(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.push_char(ch),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
