use crate::config::Config;
use crate::ui::alert::{AlertDialogState, AlertIntent, AlertReducer};
use crate::ui::mvi::Reducer;
use crate::view_model::{CounterEcho, Projection};

/// The four fixed gesture sources, in on-screen order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Button {
    Decrement,
    Increment,
    Reset,
    Alert,
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::Decrement,
        Button::Increment,
        Button::Reset,
        Button::Alert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::Decrement => "-",
            Button::Increment => "+",
            Button::Reset => "Reset",
            Button::Alert => "Alert",
        }
    }

    fn index(self) -> usize {
        match self {
            Button::Decrement => 0,
            Button::Increment => 1,
            Button::Reset => 2,
            Button::Alert => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Buttons,
    Input,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    title: String,
    focus: Focus,
    selected: Button,
    view_model: CounterEcho,
    /// State of the alert dialog (MVI pattern).
    alert: AlertDialogState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            title: config.app.title.clone(),
            focus: Focus::Buttons,
            selected: Button::Increment,
            view_model: CounterEcho::new(config.counter.overflow),
            alert: AlertDialogState::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn projection(&self) -> Projection {
        self.view_model.projection()
    }

    /// Raw text in the input box (without the echo prefix).
    pub fn input(&self) -> &str {
        self.view_model.input()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_button(&self) -> Button {
        self.selected
    }

    pub fn alert(&self) -> &AlertDialogState {
        &self.alert
    }

    pub fn show_alert(&self) -> bool {
        self.alert.is_visible()
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    pub fn press(&mut self, button: Button) {
        self.selected = button;
        match button {
            Button::Decrement => self.view_model.decrement(),
            Button::Increment => self.view_model.increment(),
            Button::Reset => self.view_model.reset(),
            Button::Alert => {
                let notification = self.view_model.notify();
                tracing::info!(body = %notification.body, "alert shown");
                self.dispatch_alert(AlertIntent::Show { notification });
                return;
            }
        }
        tracing::debug!(
            button = button.label(),
            count = self.view_model.projection().count,
            "button pressed"
        );
    }

    pub fn press_selected(&mut self) {
        self.press(self.selected);
    }

    pub fn dismiss_alert(&mut self) {
        if self.alert.is_visible() {
            tracing::info!("alert dismissed");
        }
        self.dispatch_alert(AlertIntent::Dismiss);
    }

    /// Moves the button selection by `delta` places, wrapping around.
    pub fn move_selection(&mut self, delta: isize) {
        let len = Button::ALL.len() as isize;
        let next = (self.selected.index() as isize + delta).rem_euclid(len);
        self.selected = Button::ALL[next as usize];
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_buttons(&mut self) {
        self.focus = Focus::Buttons;
    }

    // ========================================================================
    // Text input: every edit hands the whole new text to the view model.
    // ========================================================================

    pub fn push_char(&mut self, ch: char) {
        let mut text = self.view_model.input().to_string();
        text.push(ch);
        self.set_input(text);
    }

    pub fn pop_char(&mut self) {
        let mut text = self.view_model.input().to_string();
        if text.pop().is_some() {
            self.set_input(text);
        }
    }

    pub fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub fn on_paste(&mut self, pasted: &str) {
        if self.focus != Focus::Input || self.alert.is_visible() {
            return;
        }
        let text = format!("{}{}", self.view_model.input(), pasted);
        self.set_input(text);
    }

    fn set_input(&mut self, text: String) {
        tracing::debug!(len = text.chars().count(), "input changed");
        self.view_model.set_input(text);
    }

    fn dispatch_alert(&mut self, intent: AlertIntent) {
        dispatch_mvi!(self, alert, AlertReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn starts_focused_on_buttons_with_increment_selected() {
        let app = make_app();
        assert_eq!(app.focus(), Focus::Buttons);
        assert_eq!(app.selected_button(), Button::Increment);
        assert_eq!(app.title(), "Expo Test App");
    }

    #[test]
    fn move_selection_wraps_both_ways() {
        let mut app = make_app();
        app.move_selection(-1);
        assert_eq!(app.selected_button(), Button::Decrement);
        app.move_selection(-1);
        assert_eq!(app.selected_button(), Button::Alert);
        app.move_selection(1);
        assert_eq!(app.selected_button(), Button::Decrement);
        app.move_selection(2);
        assert_eq!(app.selected_button(), Button::Reset);
    }

    #[test]
    fn alert_press_does_not_change_count() {
        let mut app = make_app();
        app.press(Button::Increment);
        let before = app.projection();
        app.press(Button::Alert);
        assert_eq!(app.projection(), before);
        assert!(app.show_alert());
    }

    #[test]
    fn pop_char_on_empty_input_is_noop() {
        let mut app = make_app();
        app.pop_char();
        assert_eq!(app.input(), "");
    }

    #[test]
    fn pop_char_removes_whole_char() {
        let mut app = make_app();
        app.push_char('h');
        app.push_char('é');
        app.pop_char();
        assert_eq!(app.input(), "h");
    }

    #[test]
    fn paste_ignored_unless_input_focused() {
        let mut app = make_app();
        app.on_paste("nope");
        assert_eq!(app.input(), "");
        app.focus_input();
        app.on_paste("yes");
        assert_eq!(app.input(), "yes");
    }
}
