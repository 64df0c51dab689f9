mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{AppEvent, InputStatus, LogBuffer};

use std::{io::stdout, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{hint::HintProvider, store::RecordStore};

/// Entry point for running the UI. Must be called inside a tokio runtime.
pub fn run_ui(
    store: Arc<dyn RecordStore>,
    hints: Arc<dyn HintProvider>,
    hint_timeout: Duration,
) -> Result<()> {
    let logs = LogBuffer::new();

    let mut app = App::new(store, hints, hint_timeout, logs);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
