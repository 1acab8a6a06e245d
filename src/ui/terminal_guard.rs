use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Once};

/// Restores the terminal exactly once: on drop, or from the panic hook if a
/// panic gets there first.
pub struct TerminalGuard {
    restore: Arc<Once>,
}

impl TerminalGuard {
    fn install() -> Self {
        let restore = Arc::new(Once::new());
        let hook_restore = Arc::clone(&restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            hook_restore.call_once(restore_terminal);
            default_hook(info);
        }));
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore.call_once(restore_terminal);
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    // Any early return below drops the guard and undoes raw mode.
    let guard = TerminalGuard::install();

    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)?
        .execute(EnableBracketedPaste)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
