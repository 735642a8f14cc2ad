use std::io;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

type DashboardTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode alternate screen for the dashboard, restored on drop
pub struct TerminalManager {
    terminal: DashboardTerminal,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut DashboardTerminal {
        &mut self.terminal
    }

    /// Leave the alternate screen, reporting the first failure
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        Self::cleanup(&mut self.terminal)
    }

    fn cleanup(terminal: &mut DashboardTerminal) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        // Already unwinding or returning early; nothing useful to do with an error here
        if !self.restored {
            let _ = Self::cleanup(&mut self.terminal);
        }
    }
}
