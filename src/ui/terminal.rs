use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use tracing::warn;

use super::render;
use super::view::View;
use super::Display;

/// Full-screen terminal surface. Raw mode and the alternate screen are
/// undone on drop, including on early returns and Escape.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    size: (u16, u16),
}

impl TerminalDisplay {
    pub fn open(size: (u16, u16)) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
                return Err(e);
            }
        };
        // From here on, Drop restores the terminal.
        let mut display = Self { terminal, size };
        display.terminal.clear()?;
        Ok(display)
    }
}

impl Display for TerminalDisplay {
    fn show(&mut self, view: &View) -> io::Result<()> {
        let size = self.size;
        self.terminal
            .draw(|frame| render::draw(frame, view, size))
            .map(|_| ())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let restored = disable_raw_mode()
            .and_then(|_| execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show));
        if let Err(e) = restored {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}
