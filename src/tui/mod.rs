// TUI module for the interactive dashboard
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
pub(crate) use timestamps::format_timestamp;

use self::terminal::TerminalManager;
use crate::config::AppConfig;
use crate::parsers::BatchOutcome;

/// Run the interactive dashboard over an ingested batch, starting with its upload status
pub fn run_interactive(outcome: BatchOutcome, config: &AppConfig) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::from_batch(outcome, config);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
