//! Terminal setup and teardown

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Holds the terminal in the alternate screen (and raw mode, when asked)
/// and puts it back when dropped, whichever way the session ends.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W, raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        // Built before the next step so a failure still restores
        let mut guard = Self { out, raw_mode };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}
