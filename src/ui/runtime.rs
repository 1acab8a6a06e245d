use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the screen until the user quits.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.app.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    tracing::info!(title = app.title(), "screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            // Redraw only; ratatui picks up the new size on the next draw.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("event reader stopped");
                break;
            }
        }
    }

    drop(guard);
    tracing::info!(count = app.projection().count, "screen closed");
    Ok(())
}
